use reqwest::Method;

use super::{DEFAULT_LIMIT, DEFAULT_PAGE, filter};
use crate::{Envelope, PurfactedClient, RequestOptions, Result};

/// Filters for [`PurfactedClient::list_sources`].
///
/// `min_credibility` is sent whenever it is set, `0` included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct SourceQuery {
    fact_id: Option<String>,
    source_type: Option<String>,
    min_credibility: Option<u32>,
    page: u32,
    limit: u32,
}

impl Default for SourceQuery {
    fn default() -> Self {
        Self {
            fact_id: None,
            source_type: None,
            min_credibility: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SourceQuery {
    /// No filters, first page of 20.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only sources attached to this fact.
    pub fn fact_id(mut self, fact_id: impl Into<String>) -> Self {
        self.fact_id = Some(fact_id.into());
        self
    }

    /// Only sources of this type (sent as `type`).
    pub fn source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    /// Only sources with at least this credibility score.
    pub fn min_credibility(mut self, min_credibility: u32) -> Self {
        self.min_credibility = Some(min_credibility);
        self
    }

    /// Page number, starting at 1.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// The query string this listing sends.
    pub fn options(&self) -> RequestOptions {
        RequestOptions::new()
            .query("page", self.page)
            .query("limit", self.limit)
            .query_opt("factId", filter(&self.fact_id))
            .query_opt("type", filter(&self.source_type))
            .query_opt("minCredibility", self.min_credibility)
    }
}

impl PurfactedClient {
    /// List sources with optional filtering.
    pub async fn list_sources(&self, query: &SourceQuery) -> Result<Envelope> {
        self.request(Method::GET, "/sources", query.options()).await
    }

    /// Get detailed information about a specific source.
    pub async fn get_source(&self, source_id: &str) -> Result<Envelope> {
        self.request(
            Method::GET,
            &format!("/sources/{source_id}"),
            RequestOptions::new(),
        )
        .await
    }
}
