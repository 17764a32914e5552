//! Shared test helpers for workato-client integration tests.
//!
//! Each test gets its own wiremock server and a client pointed at it.

#![expect(
    dead_code,
    reason = "Test utilities shared across integration test modules"
)]

use serde_json::Value;
use wiremock::{MockServer, Request};

use workato_client::{ClientConfig, WorkatoClient};

pub const TEST_TOKEN: &str = "test_token";

/// Start a mock server and build a client against it.
pub async fn setup() -> (MockServer, WorkatoClient) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(TEST_TOKEN, server.uri()).expect("valid config");
    let client = WorkatoClient::new(config).expect("client builds");
    (server, client)
}

/// The one request the server received. Fails if there were zero or several.
pub async fn single_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

/// Query pairs in the order they were sent.
pub fn query_of(request: &Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

pub fn json_body(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body is JSON")
}

pub fn assert_authorized(request: &Request) {
    assert_eq!(
        header(request, "authorization"),
        Some(format!("Bearer {TEST_TOKEN}").as_str())
    );
}
