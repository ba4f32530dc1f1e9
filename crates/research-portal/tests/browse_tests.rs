//! Interactive browse loop driven from an in-memory script.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_portal::browse::run_browse;
use research_portal::{Config, PortalClient, Route};

fn papers(n: usize) -> Value {
    let data: Vec<Value> = (0..n)
        .map(|i| json!({"cord_uid": format!("p{i}"), "title": format!("Paper {i}")}))
        .collect();
    json!({ "data": data })
}

async fn run_script(server: &MockServer, start: &str, script: &str) -> String {
    let config = Config::for_testing(&server.uri());
    let client = PortalClient::new(&config).unwrap();
    let mut output = Vec::new();

    run_browse(client, &config, Route::parse(start).unwrap(), script.as_bytes(), &mut output)
        .await
        .unwrap();

    String::from_utf8(output).unwrap()
}

async fn mount_backend(server: &MockServer, returned: usize) {
    Mock::given(method("GET"))
        .and(path("/api/get-recent-topic-research-papers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(papers(returned)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/get-paper-search-results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(papers(1)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/get-recent-paper-distribution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(server)
        .await;
}

// =============================================================================
// Browse loop
// =============================================================================

#[tokio::test]
async fn test_renders_start_page_and_quits() {
    let server = MockServer::start().await;
    mount_backend(&server, 2).await;

    let output = run_script(&server, "/vaccine", "quit\n").await;

    assert!(output.contains("[Vaccine]"));
    assert!(output.contains("## 1. Paper 0"));
    assert!(output.contains("## 2. Paper 1"));
    assert!(!output.contains("[Show More]"));
}

#[tokio::test]
async fn test_end_of_input_leaves_loop() {
    let server = MockServer::start().await;
    mount_backend(&server, 0).await;

    let output = run_script(&server, "/prevention", "").await;
    assert!(output.contains("No papers found!"));
    assert!(output.ends_with("> "));
}

#[tokio::test]
async fn test_peer_toggle_rerenders_with_switch_on() {
    let server = MockServer::start().await;
    mount_backend(&server, 1).await;

    let output = run_script(&server, "/diagnosis", "peer\nquit\n").await;

    assert!(output.contains("[ ] Peer-Reviewed Papers Only"));
    assert!(output.contains("[x] Peer-Reviewed Papers Only"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().any(|r| {
        r.url.query_pairs().any(|(k, v)| k == "filters" && v == " AND is_peer_reviewed:true")
    }));
}

#[tokio::test]
async fn test_clinical_toggle_rejected_off_treatment_pages() {
    let server = MockServer::start().await;
    mount_backend(&server, 1).await;

    let output = run_script(&server, "/vaccine", "clinical\nq\n").await;
    assert!(output.contains("Clinical trial filter is only offered on treatment pages."));
}

#[tokio::test]
async fn test_more_when_page_not_full() {
    let server = MockServer::start().await;
    mount_backend(&server, 3).await;

    let output = run_script(&server, "/latest", "more\nq\n").await;
    assert!(output.contains("No more papers."));
}

#[tokio::test]
async fn test_more_requests_larger_page() {
    let server = MockServer::start().await;
    mount_backend(&server, 10).await;

    run_script(&server, "/latest", "more\nq\n").await;

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().any(|r| r.url.query_pairs().any(|(k, v)| k == "size" && v == "20")));
}

#[tokio::test]
async fn test_search_command_opens_results() {
    let server = MockServer::start().await;
    mount_backend(&server, 1).await;

    let output = run_script(&server, "/", "search masks reused\nq\n").await;
    assert!(output.contains("Search Results for \"masks reused\""));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().any(|r| {
        r.url.path() == "/api/get-paper-search-results"
            && r.url.query_pairs().any(|(k, v)| k == "query" && v == "masks reused")
    }));
}

#[tokio::test]
async fn test_unknown_command_and_help() {
    let server = MockServer::start().await;
    mount_backend(&server, 1).await;

    let output = run_script(&server, "/", "dance\nhelp\nq\n").await;
    assert!(output.contains("unknown command 'dance'"));
    assert!(output.contains("search <text>"));
}
