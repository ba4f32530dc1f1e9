//! Portal API endpoint paths.

/// An endpoint of the portal's JSON API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `query, filters, size` → papers, newest first.
    RecentTopicPapers,
    /// `query, filters, size` → papers with highlighted snippets.
    PaperSearch,
    /// `query, filters` → `[timestamp_ms, count]` pairs.
    PaperDistribution,
    /// `size` → most-mentioned treatments.
    TopTreatments,
    /// `name` → treatment detail record.
    TreatmentData,
    /// Backend liveness.
    Healthcheck,
}

impl Endpoint {
    /// Path relative to the portal origin.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::RecentTopicPapers => "/api/get-recent-topic-research-papers",
            Self::PaperSearch => "/api/get-paper-search-results",
            Self::PaperDistribution => "/api/get-recent-paper-distribution",
            Self::TopTreatments => "/api/get-top-treatments",
            Self::TreatmentData => "/api/get-treatment-data",
            Self::Healthcheck => "/api/healthcheck",
        }
    }
}
