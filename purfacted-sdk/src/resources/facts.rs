use reqwest::Method;

use super::{DEFAULT_LIMIT, DEFAULT_PAGE, filter};
use crate::{Envelope, PurfactedClient, RequestOptions, Result};

/// Filters for [`PurfactedClient::search_facts`].
///
/// `page` and `limit` are always sent (defaults `1` and `20`); the other filters
/// only when set to a non-empty value.
///
/// # Examples
/// ```
/// # use purfacted::FactSearch;
/// let search = FactSearch::new().q("climate").status("PROVEN").limit(10);
/// let opts = search.options();
/// let keys: Vec<_> = opts.query_pairs().iter().map(|(k, _)| k.as_str()).collect();
/// assert_eq!(keys, ["page", "limit", "q", "status"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct FactSearch {
    q: Option<String>,
    status: Option<String>,
    category: Option<String>,
    sort: Option<String>,
    page: u32,
    limit: u32,
}

impl Default for FactSearch {
    fn default() -> Self {
        Self {
            q: None,
            status: None,
            category: None,
            sort: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl FactSearch {
    /// No filters, first page of 20.
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-text query.
    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Trust status, e.g. `PROVEN`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Category id.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sort order as understood by the API.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
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

    /// The query string this search sends.
    pub fn options(&self) -> RequestOptions {
        RequestOptions::new()
            .query("page", self.page)
            .query("limit", self.limit)
            .query_opt("q", filter(&self.q))
            .query_opt("status", filter(&self.status))
            .query_opt("category", filter(&self.category))
            .query_opt("sort", filter(&self.sort))
    }
}

impl PurfactedClient {
    /// Search and list facts.
    ///
    /// # Examples
    /// ```no_run
    /// # use purfacted::{FactSearch, PurfactedClient, Result};
    /// # use purfacted::models::FactList;
    /// # async fn run(client: PurfactedClient) -> Result<()> {
    /// let found = client
    ///     .search_facts(&FactSearch::new().q("climate").status("PROVEN").limit(10))
    ///     .await?;
    /// for fact in found.data_as::<FactList>()?.facts {
    ///     println!("{:?} ({:?})", fact.title, fact.status);
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn search_facts(&self, search: &FactSearch) -> Result<Envelope> {
        self.request(Method::GET, "/facts", search.options()).await
    }

    /// Get detailed information about a specific fact.
    pub async fn get_fact(&self, fact_id: &str) -> Result<Envelope> {
        self.request(
            Method::GET,
            &format!("/facts/{fact_id}"),
            RequestOptions::new(),
        )
        .await
    }
}
