//! Probe and operational endpoint tests.

mod common;

use common::TestApp;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn root_describes_the_generate_endpoint() {
    let mock_server = MockServer::start().await;
    let app = TestApp::spawn(&mock_server.uri()).await;

    let response = reqwest::get(&app.address)
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(
        body,
        "Autoleadsa1 API is running. Use the /api/generate?topic=YOUR_TOPIC endpoint to get started."
    );
}

#[tokio::test]
async fn health_check_returns_ok() {
    let mock_server = MockServer::start().await;
    let app = TestApp::spawn(&mock_server.uri()).await;

    let response = reqwest::get(format!("{}/health", app.address))
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "leadgen-service");
}

#[tokio::test]
async fn readiness_follows_the_provider_health_check() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn(&mock_server.uri()).await;

    let response = reqwest::get(format!("{}/ready", app.address))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn readiness_fails_when_the_provider_is_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn(&mock_server.uri()).await;

    let response = reqwest::get(format!("{}/ready", app.address))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 503);
}

#[tokio::test]
async fn responses_echo_the_request_id() {
    let mock_server = MockServer::start().await;
    let app = TestApp::spawn(&mock_server.uri()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "test-request-7")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.headers()["x-request-id"], "test-request-7");

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(!response.headers()["x-request-id"].is_empty());
}

#[tokio::test]
async fn blank_request_id_is_replaced() {
    let mock_server = MockServer::start().await;
    let app = TestApp::spawn(&mock_server.uri()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "   ")
        .send()
        .await
        .expect("Failed to send request");

    let echoed = response.headers()["x-request-id"]
        .to_str()
        .expect("request id is not ASCII");
    assert!(!echoed.trim().is_empty());
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_text() {
    let mock_server = MockServer::start().await;
    let app = TestApp::spawn(&mock_server.uri()).await;
    let client = reqwest::Client::new();

    client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    let body = client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("http_requests_total"));
}

#[test]
fn config_loads_defaults_from_the_environment() {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__PORT", "0");
    std::env::set_var("GOOGLE_API_KEY", "env-test-key");

    let config = leadgen_service::config::LeadgenConfig::load().expect("Failed to load config");

    assert_eq!(config.server.port, 0);
    assert_eq!(config.google.model, "gemini-2.5-flash");
    assert_eq!(
        config.google.api_base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(config.generation.product_name, "Autoleadsa1");
    assert!(config.generation.temperature.is_none());
    assert!(config.generation.max_output_tokens.is_none());
}
