//! Mock admin API server for testing
//!
//! This provides a fake agent that answers admin API calls without requiring
//! a real agent to be running.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock agent server that simulates admin API responses
pub struct MockAdminServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockAdminServer {
    /// Create a new mock admin server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Mock a send-message call that expects `{"content": content}`
    pub async fn mock_send_message(&self, connection_id: &str, content: &str, response: Value) {
        Mock::given(method("POST"))
            .and(path(format!("/connections/{}/send-message", connection_id)))
            .and(body_json(json!({ "content": content })))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a send-ping call that expects `{"content": content}`
    pub async fn mock_send_ping(&self, connection_id: &str, content: &str, response: Value) {
        Mock::given(method("POST"))
            .and(path(format!("/connections/{}/send-ping", connection_id)))
            .and(body_json(json!({ "content": content })))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint answering with a JSON body
    pub async fn mock_json(&self, http_method: &str, endpoint: &str, response: Value) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint answering with a raw body
    pub async fn mock_raw(&self, http_method: &str, endpoint: &str, status_code: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status_code).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint answering 200 with no body at all
    pub async fn mock_empty(&self, http_method: &str, endpoint: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.server)
            .await;
    }

    /// Mock agent error response
    pub async fn mock_error(&self, http_method: &str, endpoint: &str, status_code: u16, error_msg: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": error_msg
            })))
            .mount(&self.server)
            .await;
    }

    /// Requests the mock has seen so far
    pub async fn received(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
