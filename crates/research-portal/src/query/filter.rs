//! Boolean query refinements and their translation to index query syntax.

use std::fmt;

/// A named boolean refinement of a paper query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterPredicate {
    /// Only peer-reviewed papers.
    PeerReviewed,
    /// Only papers reporting clinical trial results.
    ClinicalTrials,
}

impl FilterPredicate {
    /// Predicates in the order their clauses are emitted.
    pub const ALL: [Self; 2] = [Self::PeerReviewed, Self::ClinicalTrials];

    /// Index field the predicate tests.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::PeerReviewed => "is_peer_reviewed",
            Self::ClinicalTrials => "is_clinical_paper",
        }
    }

    /// Name used in the `?filters=` route parameter.
    #[must_use]
    pub const fn route_name(self) -> &'static str {
        match self {
            Self::PeerReviewed => "peer-reviewed",
            Self::ClinicalTrials => "clinical-trials",
        }
    }

    /// Switch label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PeerReviewed => "Peer-Reviewed Papers Only",
            Self::ClinicalTrials => "Clinical Trial Results Only",
        }
    }

    /// Look a predicate up by its route name.
    #[must_use]
    pub fn from_route_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.route_name() == name.trim())
    }
}

/// The active refinements of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSet {
    peer_reviewed: bool,
    clinical_trials: bool,
}

impl FilterSet {
    /// No refinements.
    #[must_use]
    pub const fn new() -> Self {
        Self { peer_reviewed: false, clinical_trials: false }
    }

    /// Build from `?filters=` names, ignoring names that mean nothing here.
    pub fn from_route_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut set = Self::new();
        for name in names {
            match FilterPredicate::from_route_name(name.as_ref()) {
                Some(predicate) => set.set(predicate, true),
                None => tracing::debug!(filter = name.as_ref(), "Ignoring unknown route filter"),
            }
        }
        set
    }

    /// Whether `predicate` is active.
    #[must_use]
    pub const fn is_active(&self, predicate: FilterPredicate) -> bool {
        match predicate {
            FilterPredicate::PeerReviewed => self.peer_reviewed,
            FilterPredicate::ClinicalTrials => self.clinical_trials,
        }
    }

    /// Turn `predicate` on or off.
    pub fn set(&mut self, predicate: FilterPredicate, on: bool) {
        match predicate {
            FilterPredicate::PeerReviewed => self.peer_reviewed = on,
            FilterPredicate::ClinicalTrials => self.clinical_trials = on,
        }
    }

    /// Flip `predicate`, returning its new state.
    pub fn toggle(&mut self, predicate: FilterPredicate) -> bool {
        let on = !self.is_active(predicate);
        self.set(predicate, on);
        on
    }

    /// Active predicates in emission order.
    pub fn active(&self) -> impl Iterator<Item = FilterPredicate> + '_ {
        FilterPredicate::ALL.into_iter().filter(|p| self.is_active(*p))
    }

    /// True when nothing is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Query fragment appended to the base query, e.g.
    /// `" AND is_peer_reviewed:true AND is_clinical_paper:true"`.
    ///
    /// Empty when no predicate is active.
    #[must_use]
    pub fn clause(&self) -> String {
        self.active().map(|p| format!(" AND {}:true", p.field())).collect()
    }

    /// `?filters=` value reproducing this set.
    #[must_use]
    pub fn route_names(&self) -> Vec<&'static str> {
        self.active().map(FilterPredicate::route_name).collect()
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clause())
    }
}
