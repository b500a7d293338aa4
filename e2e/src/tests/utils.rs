use std::sync::Once;

use httpmock::MockServer;
use purfacted::PurfactedClient;
use serde_json::{json, Value};

static TRACING_INIT: Once = Once::new();

/// API key every test client sends.
pub const TEST_API_KEY: &str = "pk_test_e2e";

/// Path prefix the mock server serves the API under.
pub const API_PREFIX: &str = "/api/v1";

/// Initializes the tracing subscriber for tests.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(std::env::var("TRACING").unwrap_or_else(|_| "info".to_string()))
            // Use with_test_writer to ensure logs are captured correctly by the test runner.
            .with_test_writer()
            .init();
    });
}

/// A client pointed at `server`, with tracing initialized.
pub fn client_for(server: &MockServer) -> PurfactedClient {
    init_tracing();
    PurfactedClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(server.url(API_PREFIX))
        .build()
        .unwrap()
}

/// Full mock path of an API endpoint.
pub fn api_path(endpoint: &str) -> String {
    format!("{API_PREFIX}{endpoint}")
}

/// A successful envelope around `data`.
pub fn ok(data: Value) -> Value {
    json!({"success": true, "data": data})
}

/// A failed envelope with an explicit error.
pub fn failure(code: &str, message: &str) -> Value {
    json!({"success": false, "error": {"code": code, "message": message}})
}
