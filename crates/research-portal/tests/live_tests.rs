//! Tests against a running portal backend.
//!
//! Point `PORTAL_API_URL` at the backend (defaults to localhost:5000).
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use research_portal::query::{FilterSet, PaperQuery, Topic};
use research_portal::view::RefreshOutcome;
use research_portal::{Config, PortalClient, PortalView, Route};

fn create_client() -> (PortalClient, Config) {
    let config = Config::from_env().expect("PORTAL_API_URL should be a valid URL");
    let client = PortalClient::new(&config).expect("Failed to create client");
    (client, config)
}

// =============================================================================
// Endpoints
// =============================================================================

#[tokio::test]
async fn test_backend_is_healthy() {
    let (client, _) = create_client();
    let status = client.health().await.expect("Healthcheck should succeed");
    assert!(status.is_healthy);
}

#[tokio::test]
async fn test_vaccine_papers_are_tagged() {
    let (client, _) = create_client();
    let query = PaperQuery::new(Topic::Vaccine.query(), FilterSet::new(), 10);

    let papers = client.recent_topic_papers(&query).await.expect("Fetch should succeed");
    assert!(!papers.is_empty(), "Vaccine topic should have papers");
    assert!(papers.iter().all(|p| p.topics.iter().any(|t| t == "vaccine")));
}

#[tokio::test]
async fn test_top_treatments_are_ranked() {
    let (client, _) = create_client();
    let top = client.top_treatments(10).await.expect("Fetch should succeed");

    assert!(top.len() <= 10);
    assert!(top.windows(2).all(|w| w[0].num_paper_mentions >= w[1].num_paper_mentions));
}

// =============================================================================
// Views
// =============================================================================

#[tokio::test]
async fn test_search_view_loads() {
    let (client, config) = create_client();
    let view = PortalView::new(client, Route::parse("/search/mask%20reuse").unwrap(), &config);

    assert_eq!(view.load().await, RefreshOutcome::Applied);
    let state = view.snapshot().await;
    assert!(!state.is_loading());
    println!("{} papers, {} histogram buckets", state.papers.unwrap().len(), state.distribution.len());
}
