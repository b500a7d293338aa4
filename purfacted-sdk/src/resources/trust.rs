use reqwest::Method;
use serde_json::json;

use crate::{Envelope, PurfactedClient, RequestOptions, Result};

/// Largest batch [`PurfactedClient::batch_trust_metrics`] is documented to accept.
///
/// Not enforced locally: larger batches are rejected by the API and come back as
/// [`crate::Error::Api`].
pub const MAX_BATCH_TRUST_IDS: usize = 100;

impl PurfactedClient {
    /// Get comprehensive trust metrics for a fact.
    ///
    /// # Examples
    /// ```no_run
    /// # use purfacted::{PurfactedClient, Result};
    /// # use purfacted::models::TrustMetrics;
    /// # async fn run(client: PurfactedClient) -> Result<()> {
    /// let trust: TrustMetrics = client.get_trust_metrics("some_fact_id").await?.data_as()?;
    /// println!("weighted score: {:?}", trust.votes.weighted_score);
    /// # Ok(()) }
    /// ```
    pub async fn get_trust_metrics(&self, fact_id: &str) -> Result<Envelope> {
        self.request(
            Method::GET,
            &format!("/trust/{fact_id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// Get trust metrics for multiple facts at once (at most [`MAX_BATCH_TRUST_IDS`]).
    pub async fn batch_trust_metrics<S: AsRef<str>>(&self, fact_ids: &[S]) -> Result<Envelope> {
        self.request(Method::POST, "/trust/batch", batch_options(fact_ids))
            .await
    }

    /// Get overall platform trust statistics.
    pub async fn get_platform_stats(&self) -> Result<Envelope> {
        self.request(Method::GET, "/trust/stats", RequestOptions::new())
            .await
    }
}

fn batch_options<S: AsRef<str>>(fact_ids: &[S]) -> RequestOptions {
    let ids: Vec<&str> = fact_ids.iter().map(|id| id.as_ref()).collect();
    RequestOptions::new().json(json!({ "factIds": ids }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_body_lists_fact_ids() {
        let opts = batch_options(&["f1", "f2"]);
        assert_eq!(opts.body(), Some(&json!({"factIds": ["f1", "f2"]})));
        assert!(opts.query_pairs().is_empty());
    }

    #[test]
    fn oversized_batches_are_not_truncated() {
        let ids: Vec<String> = (0..MAX_BATCH_TRUST_IDS + 1)
            .map(|i| format!("f{i}"))
            .collect();
        let opts = batch_options(&ids);
        assert_eq!(opts.body().unwrap()["factIds"].as_array().unwrap().len(), 101);
    }
}
