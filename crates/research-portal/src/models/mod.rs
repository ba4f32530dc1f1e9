//! Data models for portal API entities.
//!
//! Every optional field carries `#[serde(default)]` so partial documents
//! from the search backend still deserialize.

mod lenient;
mod paper;
mod treatment;

pub use paper::{DistributionPoint, Paper, SampleSentences};
pub use treatment::{TopTreatment, TreatmentDetail};

use serde::{Deserialize, Serialize};

/// The `{"data": ...}` envelope every portal endpoint responds with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Payload.
    pub data: T,
}

/// Health endpoint response.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Whether the backend reports itself healthy.
    #[serde(default)]
    pub is_healthy: bool,
}
