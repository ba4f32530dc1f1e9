//! Page views: query derivation, fetching, filters and pagination.
//!
//! A [`PortalView`] owns the state of one page. Every refresh takes a new
//! generation number; responses are applied only while their generation is
//! still the newest, so a slow response to a superseded refresh is dropped
//! instead of overwriting newer results.

mod pagination;
mod state;

use std::sync::Arc;

use futures::future;
use tokio::sync::Mutex;

pub use pagination::Pagination;
pub use state::ViewState;

use crate::client::PortalClient;
use crate::config::{Config, paging};
use crate::query::{FilterPredicate, PaperQuery, Topic, treatment_alias_query};
use crate::route::{Page, Route};

/// Which results endpoint a page reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultSource {
    Recent,
    Search,
}

/// What happened to a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Responses were applied (failed fetches leave their part untouched).
    Applied,
    /// A newer refresh started while this one was in flight.
    Superseded,
    /// The treatment lookup the query depends on failed.
    Failed,
    /// The page shows no papers.
    Skipped,
}

/// State and behaviour of one portal page.
#[derive(Debug, Clone)]
pub struct PortalView {
    client: PortalClient,
    route: Route,
    reset_size_on_filter_change: bool,
    state: Arc<Mutex<ViewState>>,
}

impl PortalView {
    /// Create a view for `route`. Nothing is fetched until [`Self::load`].
    #[must_use]
    pub fn new(client: PortalClient, route: Route, config: &Config) -> Self {
        let state = ViewState { filters: route.filter_set(), ..Default::default() };
        Self {
            client,
            route,
            reset_size_on_filter_change: config.reset_size_on_filter_change,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Route this view shows.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Whether the page lists papers at all.
    #[must_use]
    pub const fn has_papers(&self) -> bool {
        matches!(
            self.route.page,
            Page::Topic(_) | Page::Treatment { .. } | Page::Search { .. }
        )
    }

    /// Whether the clinical-trial switch is offered on this page.
    #[must_use]
    pub const fn offers_clinical_filter(&self) -> bool {
        matches!(self.route.page, Page::Treatment { .. })
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Initial fetch when the page opens: sidebar data, then results.
    pub async fn load(&self) -> RefreshOutcome {
        if matches!(self.route.page, Page::Treatment { name: None }) {
            self.load_top_treatments().await;
        }
        self.refresh().await
    }

    /// Flip a refinement and refetch.
    pub async fn toggle_filter(&self, predicate: FilterPredicate) -> RefreshOutcome {
        {
            let mut state = self.state.lock().await;
            let on = state.filters.toggle(predicate);
            if self.reset_size_on_filter_change {
                state.pagination.reset();
            }
            tracing::info!(
                filter = predicate.route_name(),
                on,
                size = state.pagination.size(),
                "Filter toggled"
            );
        }
        self.refresh().await
    }

    /// Grow the page size and refetch the whole, larger page.
    pub async fn show_more(&self) -> RefreshOutcome {
        {
            let mut state = self.state.lock().await;
            let size = state.pagination.show_more();
            tracing::info!(size, "Showing more papers");
        }
        self.refresh().await
    }

    /// Expand or collapse every paper card.
    pub async fn toggle_expanded(&self) -> bool {
        let mut state = self.state.lock().await;
        state.expand_cards = !state.expand_cards;
        state.expand_cards
    }

    /// Expand or collapse the treatment detail block.
    pub async fn toggle_treatment_details(&self) -> bool {
        let mut state = self.state.lock().await;
        state.show_treatment_details = !state.show_treatment_details;
        state.show_treatment_details
    }

    /// Refetch results and distribution for the current filters and size.
    ///
    /// Both requests run concurrently. A failed request is logged and leaves
    /// its part of the state as it was.
    pub async fn refresh(&self) -> RefreshOutcome {
        if !self.has_papers() {
            return RefreshOutcome::Skipped;
        }

        let (generation, filters, size) = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            (state.generation, state.filters, state.pagination.size())
        };

        let base_query = match self.base_query(generation).await {
            Ok(query) => query,
            Err(outcome) => return outcome,
        };
        let query = PaperQuery::new(base_query, filters, size);
        tracing::debug!(generation, query = %query.query, filters = %query.filters, size, "Refreshing");

        let results = async {
            match self.result_source() {
                ResultSource::Recent => self.client.recent_topic_papers(&query).await,
                ResultSource::Search => self.client.search_papers(&query).await,
            }
        };
        let distribution = self.client.paper_distribution(&query);
        let (results, distribution) = future::join(results, distribution).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(
                generation,
                current = state.generation,
                "Discarding responses from superseded refresh"
            );
            return RefreshOutcome::Superseded;
        }

        match results {
            Ok(papers) => {
                tracing::info!(count = papers.len(), requested = size, "Papers loaded");
                state.papers = Some(papers);
            }
            Err(e) => tracing::warn!(error = %e, query = %query.query, "Failed to fetch papers"),
        }
        match distribution {
            Ok(points) => state.distribution = points,
            Err(e) => {
                tracing::warn!(error = %e, query = %query.query, "Failed to fetch paper distribution");
            }
        }

        RefreshOutcome::Applied
    }

    /// Treatment pages read search results so alias matches come back highlighted.
    fn result_source(&self) -> ResultSource {
        match self.route.page {
            Page::Search { .. } | Page::Treatment { .. } => ResultSource::Search,
            _ => ResultSource::Recent,
        }
    }

    /// Index query for this page. A treatment drill-down looks its aliases
    /// up first.
    async fn base_query(&self, generation: u64) -> Result<String, RefreshOutcome> {
        match &self.route.page {
            Page::Topic(topic) => Ok(topic.query()),
            Page::Search { query } => Ok(query.clone()),
            Page::Treatment { name: None } => Ok(Topic::Treatment.query()),
            Page::Treatment { name: Some(name) } => {
                let detail = match self.client.treatment_detail(name).await {
                    Ok(detail) => detail,
                    Err(e) => {
                        tracing::warn!(error = %e, treatment = %name, "Failed to fetch treatment data");
                        return Err(RefreshOutcome::Failed);
                    }
                };
                if detail.is_unknown() {
                    tracing::info!(treatment = %name, "No treatment record, searching by name");
                }
                let query = treatment_alias_query(&detail.search_terms(name));

                let mut state = self.state.lock().await;
                if state.generation != generation {
                    return Err(RefreshOutcome::Superseded);
                }
                state.treatment = Some(detail);
                Ok(query)
            }
            Page::Landing | Page::NotFound { .. } => Err(RefreshOutcome::Skipped),
        }
    }

    async fn load_top_treatments(&self) {
        match self.client.top_treatments(paging::TOP_TREATMENTS_SIZE).await {
            Ok(top) => self.state.lock().await.top_treatments = top,
            Err(e) => tracing::warn!(error = %e, "Failed to fetch top treatments"),
        }
    }
}
