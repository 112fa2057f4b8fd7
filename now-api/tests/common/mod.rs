//! Shared helpers for the wiremock-backed integration tests.

#![allow(dead_code)]

use now_api::NowClient;
use serde_json::Value;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "TEST_TOKEN";
pub const BEARER: &str = "Bearer TEST_TOKEN";

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, NowClient) {
    now_core::logging::init_console_logging("now_api=debug");
    let server = MockServer::start().await;
    let client = NowClient::new(TOKEN)
        .expect("client")
        .with_base_url(server.uri());
    (server, client)
}

/// Expect exactly one authenticated `verb path` request, answered with `body`.
pub async fn expect_once(server: &MockServer, verb: &str, route: &str, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Fail the test if any request reaches the server.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// Number of requests the server has seen so far.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
