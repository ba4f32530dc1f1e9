//! Per-view state.

use crate::models::{DistributionPoint, Paper, TopTreatment, TreatmentDetail};
use crate::query::FilterSet;

use super::Pagination;

/// Everything a page renders from. Owned by one view, never shared across views.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Result page; `None` until the first response arrives.
    pub papers: Option<Vec<Paper>>,

    /// Publication histogram buckets.
    pub distribution: Vec<DistributionPoint>,

    /// Active refinements.
    pub filters: FilterSet,

    /// Requested page size.
    pub pagination: Pagination,

    /// Detail record of the treatment being viewed.
    pub treatment: Option<TreatmentDetail>,

    /// Sidebar list on the treatment overview.
    pub top_treatments: Vec<TopTreatment>,

    /// Whether the treatment detail block is expanded.
    pub show_treatment_details: bool,

    /// Whether paper cards show full summaries and abstracts.
    pub expand_cards: bool,

    /// Generation of the most recent refresh.
    pub(crate) generation: u64,
}

impl ViewState {
    /// True until the first result page has been applied.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.papers.is_none()
    }

    /// Whether a "show more" control should be offered.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.papers.as_ref().is_some_and(|papers| self.pagination.has_more(papers.len()))
    }

    /// Generation of the most recent refresh.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_loading() {
        let state = ViewState::default();
        assert!(state.is_loading());
        assert!(!state.has_more());
    }

    #[test]
    fn test_full_page_has_more() {
        let state = ViewState {
            papers: Some(vec![Paper::default(); 10]),
            ..Default::default()
        };
        assert!(!state.is_loading());
        assert!(state.has_more());

        let short = ViewState { papers: Some(vec![Paper::default(); 3]), ..Default::default() };
        assert!(!short.has_more());
    }
}
