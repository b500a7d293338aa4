use httpmock::prelude::*;
use purfacted::errors::RequestError;
use purfacted::{Error, PurfactedClient, RequestOptions, StatusCode};
use serde_json::json;

use super::utils::{api_path, client_for, failure, ok};

#[tokio::test]
async fn api_failure_carries_code_and_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/facts/nope"));
            then.status(404)
                .json_body(failure("NOT_FOUND", "Fact not found"));
        })
        .await;

    let client = client_for(&server);
    let err = client.get_fact("nope").await.unwrap_err();

    let Error::Api(api) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api.code, "NOT_FOUND");
    assert_eq!(api.message, "Fact not found");
}

#[tokio::test]
async fn failure_without_error_object_is_unknown() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/trust/stats"));
            then.status(500).json_body(json!({"success": false}));
        })
        .await;

    let client = client_for(&server);
    let err = client.get_platform_stats().await.unwrap_err();

    let Error::Api(api) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api.code, "UNKNOWN");
    assert_eq!(api.message, "Unknown error");
}

#[tokio::test]
async fn null_envelope_fields_still_yield_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/facts/f1"));
            then.status(409).json_body(json!({
                "success": null,
                "error": {"code": "CONFLICT", "message": null}
            }));
        })
        .await;

    let client = client_for(&server);
    let err = client.get_fact("f1").await.unwrap_err();

    let Error::Api(api) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api.code, "CONFLICT");
    assert_eq!(api.message, "Unknown error");
}

#[tokio::test]
async fn success_flag_wins_over_http_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/categories/tree"));
            then.status(202)
                .json_body(ok(json!([{"id": "science", "children": []}])));
        })
        .await;

    let client = client_for(&server);
    let envelope = client.get_category_tree().await.unwrap();
    assert_eq!(envelope.data()[0]["id"], "science");
}

#[tokio::test]
async fn non_json_error_body_is_a_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/webhooks"));
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let client = client_for(&server);
    let err = client.list_webhooks().await.unwrap_err();

    match err {
        Error::Request(RequestError::Server { status, message }) => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(message, "<html>Bad Gateway</html>");
        }
        other => panic!("expected a server error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/sources/src_1"));
            then.status(200).body("{\"success\": tru");
        })
        .await;

    let client = client_for(&server);
    let err = client.get_source("src_1").await.unwrap_err();

    assert!(matches!(
        err,
        Error::Request(RequestError::DecodeJson { .. })
    ));
    assert_eq!(err.api_code(), None);
}

#[tokio::test]
async fn connection_failures_are_transport_errors() {
    // Nothing listens on port 1.
    let client = PurfactedClient::builder()
        .api_key("key")
        .base_url("http://127.0.0.1:1/api/v1")
        .build()
        .unwrap();

    let err = client.get_fact("f1").await.unwrap_err();
    assert!(matches!(err, Error::Request(RequestError::Transport(_))));
}

#[tokio::test]
async fn raw_request_reaches_any_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api_path("/facts/f1/votes"))
                .query_param("dryRun", "true")
                .json_body(json!({"value": 1}));
            then.status(201).json_body(ok(json!({"accepted": true})));
        })
        .await;

    let client = client_for(&server);
    let envelope = client
        .request(
            purfacted::Method::POST,
            "/facts/f1/votes",
            RequestOptions::new()
                .query("dryRun", true)
                .json(json!({"value": 1})),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(envelope.data(), &json!({"accepted": true}));
}
