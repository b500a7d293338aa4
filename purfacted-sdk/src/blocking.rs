//! Blocking facade over [`crate::PurfactedClient`].
//!
//! Every call drives the async client to completion on a private current-thread
//! tokio runtime, so each operation blocks until the response arrives or the
//! transport fails. Do not use it from inside an async runtime: creating, calling
//! or dropping it there panics, as with `reqwest::blocking`.
//!
//! ```no_run
//! let client = purfacted::blocking::PurfactedClient::new("your_api_key_here")?;
//! let stats = client.get_platform_stats()?;
//! println!("{}", stats.data()["facts"]["total"]);
//! # Ok::<(), purfacted::Error>(())
//! ```

use std::sync::Arc;

use reqwest::Method;
use tokio::runtime::Runtime;

use crate::{
    BuildError, CategoryQuery, Envelope, FactSearch, NewWebhook, RequestOptions, Result,
    SourceQuery, WebhookUpdate,
};

/// Synchronous PurFacted client. Cloning shares both the runtime and the connection pool.
#[derive(Clone)]
pub struct PurfactedClient {
    inner: crate::PurfactedClient,
    rt: Arc<Runtime>,
}

impl std::fmt::Debug for PurfactedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurfactedClient")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl PurfactedClient {
    /// Blocking client for the production API with the given key.
    pub fn new<S: Into<String>>(api_key: S) -> std::result::Result<Self, BuildError> {
        Self::with_client(crate::PurfactedClient::new(api_key)?)
    }

    /// Wrap an already configured async client, e.g. one built with a custom base URL.
    pub fn with_client(inner: crate::PurfactedClient) -> std::result::Result<Self, BuildError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            inner,
            rt: Arc::new(rt),
        })
    }

    /// The async client this facade drives.
    pub fn async_client(&self) -> &crate::PurfactedClient {
        &self.inner
    }

    /// See [`crate::PurfactedClient::request`].
    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Envelope> {
        self.rt
            .block_on(self.inner.request(method, endpoint, options))
    }

    /// See [`crate::PurfactedClient::search_facts`].
    pub fn search_facts(&self, search: &FactSearch) -> Result<Envelope> {
        self.rt.block_on(self.inner.search_facts(search))
    }

    /// See [`crate::PurfactedClient::get_fact`].
    pub fn get_fact(&self, fact_id: &str) -> Result<Envelope> {
        self.rt.block_on(self.inner.get_fact(fact_id))
    }

    /// See [`crate::PurfactedClient::list_sources`].
    pub fn list_sources(&self, query: &SourceQuery) -> Result<Envelope> {
        self.rt.block_on(self.inner.list_sources(query))
    }

    /// See [`crate::PurfactedClient::get_source`].
    pub fn get_source(&self, source_id: &str) -> Result<Envelope> {
        self.rt.block_on(self.inner.get_source(source_id))
    }

    /// See [`crate::PurfactedClient::list_categories`].
    pub fn list_categories(&self, query: &CategoryQuery) -> Result<Envelope> {
        self.rt.block_on(self.inner.list_categories(query))
    }

    /// See [`crate::PurfactedClient::get_category`].
    pub fn get_category(&self, category_id: &str) -> Result<Envelope> {
        self.rt.block_on(self.inner.get_category(category_id))
    }

    /// See [`crate::PurfactedClient::get_category_tree`].
    pub fn get_category_tree(&self) -> Result<Envelope> {
        self.rt.block_on(self.inner.get_category_tree())
    }

    /// See [`crate::PurfactedClient::get_trust_metrics`].
    pub fn get_trust_metrics(&self, fact_id: &str) -> Result<Envelope> {
        self.rt.block_on(self.inner.get_trust_metrics(fact_id))
    }

    /// See [`crate::PurfactedClient::batch_trust_metrics`].
    pub fn batch_trust_metrics<S: AsRef<str>>(&self, fact_ids: &[S]) -> Result<Envelope> {
        self.rt.block_on(self.inner.batch_trust_metrics(fact_ids))
    }

    /// See [`crate::PurfactedClient::get_platform_stats`].
    pub fn get_platform_stats(&self) -> Result<Envelope> {
        self.rt.block_on(self.inner.get_platform_stats())
    }

    /// See [`crate::PurfactedClient::list_webhooks`].
    pub fn list_webhooks(&self) -> Result<Envelope> {
        self.rt.block_on(self.inner.list_webhooks())
    }

    /// See [`crate::PurfactedClient::create_webhook`].
    pub fn create_webhook(&self, webhook: &NewWebhook) -> Result<Envelope> {
        self.rt.block_on(self.inner.create_webhook(webhook))
    }

    /// See [`crate::PurfactedClient::get_webhook`].
    pub fn get_webhook(&self, webhook_id: &str) -> Result<Envelope> {
        self.rt.block_on(self.inner.get_webhook(webhook_id))
    }

    /// See [`crate::PurfactedClient::update_webhook`].
    pub fn update_webhook(&self, webhook_id: &str, update: &WebhookUpdate) -> Result<Envelope> {
        self.rt
            .block_on(self.inner.update_webhook(webhook_id, update))
    }

    /// See [`crate::PurfactedClient::delete_webhook`].
    pub fn delete_webhook(&self, webhook_id: &str) -> Result<Envelope> {
        self.rt.block_on(self.inner.delete_webhook(webhook_id))
    }
}
