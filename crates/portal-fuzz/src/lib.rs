//! Fuzzing library for research-portal.
//!
//! Targets cover the lenient JSON models returned by the portal API and
//! route parsing.
//!
//! # Usage
//!
//! ```bash
//! cd crates/portal-fuzz
//! cargo +nightly fuzz run fuzz_treatment_parse -- -max_total_time=60
//! ```

pub use research_portal::{models, route};
