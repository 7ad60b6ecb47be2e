/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskboard-adapter tests

use taskboard_adapter::{ClientConfig, TaskStoreClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server
pub fn client_for(server: &MockServer) -> TaskStoreClient {
    TaskStoreClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// JSON for a task as the store would return it
pub fn task_json(id: i64, title: &str, completed: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "completed": completed,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}
