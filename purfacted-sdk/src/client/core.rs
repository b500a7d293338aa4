use std::fmt::Debug;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::errors::BuildError;

/// Production endpoint of the PurFacted API.
pub const DEFAULT_BASE_URL: &str = "https://purfacted.com/api/v1";

/// Environment variable read by [`PurfactedClientBuilder::from_env`] for the API key.
pub const API_KEY_ENV: &str = "PURFACTED_API_KEY";

/// Environment variable read by [`PurfactedClientBuilder::from_env`] for the base URL.
pub const BASE_URL_ENV: &str = "PURFACTED_BASE_URL";

const DEFAULT_USER_AGENT: &str = concat!("purfacted-sdk", "@", env!("CARGO_PKG_VERSION"),);

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Default)]
#[must_use]
/// Configures a [`PurfactedClient`] before construction.
///
/// Most code obtains this via [`PurfactedClient::builder()`], which simply returns
/// `PurfactedClientBuilder::default()`.
///
/// # Defaults
/// - Base URL: [`DEFAULT_BASE_URL`]
/// - HTTP request timeout: reqwest default (no global timeout) unless set via
///   [`Self::request_timeout`]
/// - User-agent: `purfacted-sdk@<crate-version>` plus any [`Self::user_agent_extra`]
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use purfacted::PurfactedClient;
/// let client = PurfactedClient::builder()
///     .api_key("pk_live_123")
///     .request_timeout(Duration::from_secs(10))
///     .user_agent_extra("myapp/1.2.3")
///     .build()?;
/// # Ok::<_, purfacted::BuildError>(())
/// ```
pub struct PurfactedClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    http_request_timeout: Option<Duration>,

    /// Optional user-agent segment appended to the default UA for app-level telemetry.
    user_agent_extra: Option<String>,
}

impl Debug for PurfactedClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurfactedClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("http_request_timeout", &self.http_request_timeout)
            .field("user_agent_extra", &self.user_agent_extra)
            .finish()
    }
}

impl PurfactedClientBuilder {
    /// Start from `PURFACTED_API_KEY` and `PURFACTED_BASE_URL`.
    ///
    /// Unset variables leave the corresponding setting untouched, so the usual
    /// defaults still apply and [`Self::build`] still reports a missing key.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            builder.api_key(key);
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            builder.base_url(url);
        }
        builder
    }

    /// Set the API key sent as `X-API-Key` on every request.
    pub fn api_key<S: Into<String>>(&mut self, api_key: S) -> &mut Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API root, e.g. a staging deployment.
    ///
    /// Endpoint paths are appended verbatim, so pass the URL without a trailing slash.
    pub fn base_url<S: Into<String>>(&mut self, base_url: S) -> &mut Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set HTTP requests timeout.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.http_request_timeout = Some(timeout);
        self
    }

    /// Append an extra user-agent segment after the default `purfacted-sdk@<version>`.
    /// Example: `.user_agent_extra("myapp/1.2.3")`
    pub fn user_agent_extra<S: Into<String>>(&mut self, extra: S) -> &mut Self {
        self.user_agent_extra = Some(extra.into());
        self
    }

    /// Build [PurfactedClient]
    pub fn build(&self) -> Result<PurfactedClient, BuildError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(BuildError::MissingApiKey)?;

        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        // Reject unparsable base URLs up front.
        Url::parse(&base_url)?;

        let mut key_value =
            HeaderValue::from_str(api_key).map_err(|_err| BuildError::InvalidApiKey)?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Compose user agent with optional extra part.
        let user_agent = match &self.user_agent_extra {
            Some(extra) if !extra.trim().is_empty() => {
                format!("{DEFAULT_USER_AGENT} {}", extra.trim())
            }
            _ => DEFAULT_USER_AGENT.to_string(),
        };

        let mut http_builder = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers);

        if let Some(timeout) = self.http_request_timeout {
            http_builder = http_builder.timeout(timeout);
        }

        Ok(PurfactedClient {
            http: http_builder.build()?,
            base_url,
        })
    }
}

/// Client for the PurFacted Source of Trust API.
///
/// `PurfactedClient` owns a reqwest connection pool whose default headers carry the
/// API key and the JSON content type. Cloning is cheap and clones share the pool.
///
/// ### What it does
/// - Joins endpoint paths onto the configured base URL.
/// - Decodes every response as a `{success, data, error}` [`crate::Envelope`] and
///   turns `success: false` into [`crate::Error::Api`].
/// - Offers one method per API operation (facts, sources, categories, trust,
///   webhooks) on top of the generic [`PurfactedClient::request`].
///
/// ### What it *doesn’t* do
/// - No retries, no rate limiting, no caching, no pagination iteration.
///
/// ### Examples
/// ```no_run
/// # use purfacted::{FactSearch, PurfactedClient, Result};
/// # async fn run() -> Result<()> {
/// let client = PurfactedClient::new("your_api_key_here")?;
/// let found = client
///     .search_facts(&FactSearch::new().q("climate").status("PROVEN").limit(10))
///     .await?;
/// println!("{}", found.data()["facts"]);
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct PurfactedClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl Debug for PurfactedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurfactedClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PurfactedClient {
    /// Creates a client for the production API with the given key.
    pub fn new<S: Into<String>>(api_key: S) -> Result<PurfactedClient, BuildError> {
        Self::builder().api_key(api_key).build()
    }

    /// Returns a builder to edit settings before creating [`PurfactedClient`].
    pub fn builder() -> PurfactedClientBuilder {
        PurfactedClientBuilder::default()
    }

    // === Getters ===

    /// The API root every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_api_key() {
        let err = PurfactedClient::builder().build().unwrap_err();
        assert!(matches!(err, BuildError::MissingApiKey));

        let err = PurfactedClient::new("   ").unwrap_err();
        assert!(matches!(err, BuildError::MissingApiKey));
    }

    #[test]
    fn build_rejects_unusable_api_key() {
        let err = PurfactedClient::new("bad\nkey").unwrap_err();
        assert!(matches!(err, BuildError::InvalidApiKey));
    }

    #[test]
    fn default_base_url_is_production() {
        let client = PurfactedClient::new("key").unwrap();
        assert_eq!(client.base_url(), "https://purfacted.com/api/v1");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PurfactedClient::builder()
            .api_key("key")
            .base_url("http://localhost:8080/api/v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn invalid_base_url_is_a_build_error() {
        let err = PurfactedClient::builder()
            .api_key("key")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::BaseUrl(_)));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let mut builder = PurfactedClient::builder();
        builder.api_key("super-secret");
        assert!(!format!("{builder:?}").contains("super-secret"));

        let client = builder.build().unwrap();
        assert!(!format!("{client:?}").contains("super-secret"));
    }
}
