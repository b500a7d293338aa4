use httpmock::prelude::*;
use purfacted::models::{PlatformStats, TrustMetrics};
use serde_json::json;

use super::utils::{api_path, client_for, failure, ok};

#[tokio::test]
async fn trust_metrics_decode_into_model() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/trust/fact_7"));
            then.status(200).json_body(ok(json!({
                "status": "PROVEN",
                "votes": {"weightedScore": 0.91, "total": 120},
                "sources": {"averageCredibility": 82.5}
            })));
        })
        .await;

    let client = client_for(&server);
    let trust: TrustMetrics = client
        .get_trust_metrics("fact_7")
        .await
        .unwrap()
        .data_as()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(trust.status.as_deref(), Some("PROVEN"));
    assert_eq!(trust.votes.weighted_score, Some(0.91));
    assert_eq!(trust.votes.total, Some(120));
    assert_eq!(trust.sources.average_credibility, Some(82.5));
}

#[tokio::test]
async fn batch_trust_metrics_posts_fact_ids() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(api_path("/trust/batch"))
                .json_body(json!({"factIds": ["f1", "f2", "f3"]}));
            then.status(200)
                .json_body(ok(json!({"f1": {}, "f2": {}, "f3": {}})));
        })
        .await;

    let client = client_for(&server);
    let envelope = client
        .batch_trust_metrics(&["f1", "f2", "f3"])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(envelope.data().as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn oversized_batch_is_rejected_by_the_server() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(api_path("/trust/batch"));
            then.status(400)
                .json_body(failure("VALIDATION_ERROR", "Maximum 100 fact IDs allowed"));
        })
        .await;

    let ids: Vec<String> = (0..=purfacted::MAX_BATCH_TRUST_IDS)
        .map(|i| format!("f{i}"))
        .collect();

    let client = client_for(&server);
    let err = client.batch_trust_metrics(&ids).await.unwrap_err();
    assert_eq!(err.api_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn platform_stats_decode_into_model() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(api_path("/trust/stats"));
            then.status(200).json_body(ok(json!({
                "facts": {"total": 300, "byStatus": {"PROVEN": 120, "DISPUTED": 30}},
                "sources": {"total": 900},
                "participation": {"activeUsers": 45}
            })));
        })
        .await;

    let client = client_for(&server);
    let stats: PlatformStats = client
        .get_platform_stats()
        .await
        .unwrap()
        .data_as()
        .unwrap();

    assert_eq!(stats.facts.total, Some(300));
    assert_eq!(stats.facts.count("PROVEN"), 120);
    assert_eq!(stats.sources.total, Some(900));
    assert_eq!(stats.participation.active_users, Some(45));
}
