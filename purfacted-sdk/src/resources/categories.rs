use reqwest::Method;

use super::{DEFAULT_CATEGORY_LIMIT, DEFAULT_PAGE, filter};
use crate::{Envelope, PurfactedClient, RequestOptions, Result};

/// Filters for [`PurfactedClient::list_categories`]. Pages hold 50 categories by default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct CategoryQuery {
    q: Option<String>,
    parent: Option<String>,
    page: u32,
    limit: u32,
}

impl Default for CategoryQuery {
    fn default() -> Self {
        Self {
            q: None,
            parent: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_CATEGORY_LIMIT,
        }
    }
}

impl CategoryQuery {
    /// No filters, first page of 50.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name query.
    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Only children of this category.
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
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
            .query_opt("q", filter(&self.q))
            .query_opt("parent", filter(&self.parent))
    }
}

impl PurfactedClient {
    /// List categories with optional filtering.
    pub async fn list_categories(&self, query: &CategoryQuery) -> Result<Envelope> {
        self.request(Method::GET, "/categories", query.options())
            .await
    }

    /// Get detailed information about a specific category.
    pub async fn get_category(&self, category_id: &str) -> Result<Envelope> {
        self.request(
            Method::GET,
            &format!("/categories/{category_id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// Get the full category hierarchy as a tree.
    pub async fn get_category_tree(&self) -> Result<Envelope> {
        self.request(Method::GET, "/categories/tree", RequestOptions::new())
            .await
    }
}
