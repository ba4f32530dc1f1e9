//! Output formatters for text pages and JSON.

mod card;
mod histogram;
mod json;
mod page;

pub use self::json::*;
pub use card::*;
pub use histogram::*;
pub use page::*;
