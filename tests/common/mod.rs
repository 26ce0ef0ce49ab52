use searche_probe::{ProbeConfig, ReuseTargets, SearchRequest};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock service answering the root healthcheck the way the real server does
#[allow(dead_code)]
pub async fn spawn_service() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"version": "0.1.0", "status": "ok"})),
        )
        .mount(&server)
        .await;
    server
}

/// Mock service returning 500 for every request
#[allow(dead_code)]
pub async fn spawn_failing_service() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;
    server
}

#[allow(dead_code)]
pub fn config_for(server: &MockServer) -> ProbeConfig {
    ProbeConfig::new(server.uri())
}

#[allow(dead_code)]
pub fn targets(server: &MockServer, path1: &str, path2: &str, repetitions: usize) -> ReuseTargets {
    ReuseTargets {
        url1: format!("{}{}", server.uri(), path1),
        url2: format!("{}{}", server.uri(), path2),
        repetitions,
    }
}

#[allow(dead_code)]
pub fn lincoln_query() -> SearchRequest {
    SearchRequest {
        collection_name: "test2".to_string(),
        column_name: "passage".to_string(),
        query: "When was Abraham Lincoln born?".to_string(),
        limit: 5,
    }
}

/// Paths of every request the mock received, in arrival order
#[allow(dead_code)]
pub async fn received_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}
