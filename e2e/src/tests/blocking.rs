use httpmock::prelude::*;
use httpmock::Method::PATCH;
use purfacted::{blocking, Error, FactSearch, WebhookUpdate};
use serde_json::json;

use super::utils::{api_path, client_for, failure, ok};

fn blocking_client(server: &MockServer) -> blocking::PurfactedClient {
    blocking::PurfactedClient::with_client(client_for(server)).unwrap()
}

#[test]
fn blocking_search_returns_data() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(api_path("/facts"))
            .query_param("q", "climate")
            .query_param("status", "PROVEN")
            .query_param("limit", "10");
        then.status(200).json_body(ok(json!({
            "facts": [{"title": "X", "status": "PROVEN"}]
        })));
    });

    let client = blocking_client(&server);
    let envelope = client
        .search_facts(&FactSearch::new().q("climate").status("PROVEN").limit(10))
        .unwrap();

    mock.assert();
    assert_eq!(envelope.data()["facts"].as_array().unwrap().len(), 1);
    assert_eq!(envelope.data()["facts"][0]["title"], "X");
}

#[test]
fn blocking_update_surfaces_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PATCH)
            .path(api_path("/webhooks/wh_1"))
            .json_body(json!({"url": "https://example.com/new"}));
        then.status(403)
            .json_body(failure("FORBIDDEN", "Webhook belongs to another key"));
    });

    let client = blocking_client(&server);
    let err = client
        .update_webhook("wh_1", &WebhookUpdate::new().url("https://example.com/new"))
        .unwrap_err();

    let Error::Api(api) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api.code, "FORBIDDEN");
    assert_eq!(api.message, "Webhook belongs to another key");
}
