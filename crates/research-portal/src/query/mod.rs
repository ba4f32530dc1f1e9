//! Query construction for the portal's search index.
//!
//! Views hold structured state (topic, filters, page size); the strings
//! the backend understands are produced here and nowhere else.

mod filter;
mod topic;

pub use filter::{FilterPredicate, FilterSet};
pub use topic::{Topic, UnknownTopic};

/// Fields an alias query searches.
const ALIAS_FIELDS: [&str; 3] = ["title", "abstract", "text"];

/// A fully specified paper request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperQuery {
    /// Index query string.
    pub query: String,

    /// Active refinements.
    pub filters: FilterSet,

    /// Number of papers requested.
    pub size: u32,
}

impl PaperQuery {
    /// Create a request for `size` papers matching `query`.
    #[must_use]
    pub fn new(query: impl Into<String>, filters: FilterSet, size: u32) -> Self {
        Self { query: query.into(), filters, size }
    }

    /// Query-string parameters for the results endpoints.
    #[must_use]
    pub fn result_params(&self) -> Vec<(String, String)> {
        vec![
            ("query".to_string(), self.query.clone()),
            ("filters".to_string(), self.filters.clause()),
            ("size".to_string(), self.size.to_string()),
        ]
    }

    /// Query-string parameters for the distribution endpoint (no size).
    #[must_use]
    pub fn distribution_params(&self) -> Vec<(String, String)> {
        vec![
            ("query".to_string(), self.query.clone()),
            ("filters".to_string(), self.filters.clause()),
        ]
    }
}

/// Build the drill-down query for a treatment known under `aliases`:
/// `title:("a" OR "b") OR abstract:("a" OR "b") OR text:("a" OR "b")`.
#[must_use]
pub fn treatment_alias_query<S: AsRef<str>>(aliases: &[S]) -> String {
    let subquery = aliases
        .iter()
        .map(|alias| format!("\"{}\"", alias.as_ref().replace('"', "\\\"")))
        .collect::<Vec<_>>()
        .join(" OR ");

    ALIAS_FIELDS
        .iter()
        .map(|field| format!("{field}:({subquery})"))
        .collect::<Vec<_>>()
        .join(" OR ")
}
