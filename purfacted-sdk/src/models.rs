//! Typed views over the `data` payloads the platform documents.
//!
//! Every field is optional and unknown fields are kept in `extra`, so a model never
//! rejects a payload just because the API grew a new field. Use them through
//! [`crate::Envelope::data_as`].

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// `data` of [`crate::PurfactedClient::search_facts`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FactList {
    /// Matching facts for the requested page.
    #[serde(default)]
    pub facts: Vec<Fact>,
    /// Remaining fields (pagination metadata and the like).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A claim tracked by the platform.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Fact {
    /// Fact identifier.
    pub id: Option<String>,
    /// Short statement of the claim.
    pub title: Option<String>,
    /// Trust status, e.g. `PROVEN`.
    pub status: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `data` of [`crate::PurfactedClient::get_trust_metrics`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrustMetrics {
    /// Trust status of the fact.
    pub status: Option<String>,
    /// Vote aggregates.
    #[serde(default)]
    pub votes: VoteMetrics,
    /// Source aggregates.
    #[serde(default)]
    pub sources: SourceMetrics,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Vote aggregates of a fact.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteMetrics {
    /// Credibility-weighted vote score.
    pub weighted_score: Option<f64>,
    /// Number of votes cast.
    pub total: Option<u64>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Source aggregates of a fact.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMetrics {
    /// Mean credibility of the sources backing the fact.
    pub average_credibility: Option<f64>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `data` of [`crate::PurfactedClient::get_platform_stats`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlatformStats {
    /// Fact counts.
    #[serde(default)]
    pub facts: FactStats,
    /// Source counts.
    #[serde(default)]
    pub sources: Counter,
    /// User participation.
    #[serde(default)]
    pub participation: Participation,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fact counts, overall and per status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactStats {
    /// Number of facts.
    pub total: Option<u64>,
    /// Number of facts per trust status.
    #[serde(default)]
    pub by_status: BTreeMap<String, u64>,
}

impl FactStats {
    /// Count for one status, `0` when the API did not list it.
    pub fn count(&self, status: &str) -> u64 {
        self.by_status.get(status).copied().unwrap_or(0)
    }
}

/// A bare `{total}` counter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Counter {
    /// Number of items.
    pub total: Option<u64>,
}

/// User participation figures.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    /// Users active on the platform.
    pub active_users: Option<u64>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A webhook subscription.
///
/// `secret` is only returned once, by [`crate::PurfactedClient::create_webhook`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Webhook identifier.
    pub id: Option<String>,
    /// Delivery URL.
    pub url: Option<String>,
    /// Subscribed events, e.g. `fact.status_changed`.
    #[serde(default)]
    pub events: Vec<String>,
    /// Whether deliveries are enabled.
    pub is_active: Option<bool>,
    /// Signing secret.
    pub secret: Option<String>,
    /// Remaining fields (delivery logs and the like).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
