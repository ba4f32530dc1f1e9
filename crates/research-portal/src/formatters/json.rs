//! JSON output for scripting.

use serde_json::{Value, json};

use crate::models::Paper;
use crate::route::Route;
use crate::view::ViewState;

/// Create a compact paper representation, omitting absent fields.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "cordUid": paper.cord_uid,
        "title": paper.title_or_default(),
        "peerReviewed": paper.is_peer_reviewed,
        "clinicalTrial": paper.is_clinical_paper,
    });

    if !paper.authors.is_empty() {
        obj["authors"] = json!(paper.authors);
    }

    if let Some(date) = &paper.publish_date {
        obj["published"] = json!(date);
    }

    if let Some(journal) = &paper.journal {
        obj["journal"] = json!(journal);
    }

    if let Some(link) = paper.link() {
        obj["url"] = json!(link);
    }

    if let Some(summary) = &paper.summary {
        obj["summary"] = json!(summary);
    }

    if !paper.topics.is_empty() {
        obj["topics"] = json!(paper.topics);
    }

    obj
}

/// The whole view as one JSON document.
#[must_use]
pub fn view_json(route: &Route, state: &ViewState) -> Value {
    let mut obj = json!({
        "route": route.to_path(),
        "loading": state.is_loading(),
        "size": state.pagination.size(),
        "filters": state.filters.route_names(),
        "hasMore": state.has_more(),
        "papers": state
            .papers
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(compact_paper)
            .collect::<Vec<_>>(),
        "distribution": state.distribution,
    });

    if let Some(treatment) = &state.treatment {
        obj["treatment"] = json!(treatment);
    }

    if !state.top_treatments.is_empty() {
        obj["topTreatments"] = json!(state.top_treatments);
    }

    obj
}
