use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::util::decode_envelope;
use crate::{Envelope, PurfactedClient, Result};

/// Query parameters and JSON body of a single request.
///
/// Only what is set here goes on the wire: no query string is appended when
/// `query` is empty, and no body is sent when `body` is `None`.
///
/// # Examples
/// ```
/// # use purfacted::RequestOptions;
/// let opts = RequestOptions::new()
///     .query("page", 1)
///     .query("q", "climate")
///     .json(serde_json::json!({"factIds": ["a", "b"]}));
/// assert_eq!(opts.query_pairs().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl RequestOptions {
    /// Empty options: no query, no body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query parameter.
    pub fn query<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter only when `value` is `Some`.
    pub fn query_opt<K: Into<String>, V: ToString>(self, key: K, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Send `body` as the JSON request body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// The JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

impl PurfactedClient {
    /// Call an arbitrary endpoint and unwrap its envelope.
    ///
    /// `endpoint` is appended verbatim to the base URL (e.g. `/facts`). The response
    /// body is always decoded as an [`Envelope`]; `success: false` becomes
    /// [`crate::Error::Api`], transport and decoding faults are returned as
    /// [`crate::Error::Request`] untouched.
    ///
    /// # Examples
    /// ```no_run
    /// # use purfacted::{Method, PurfactedClient, RequestOptions, Result};
    /// # async fn run(client: PurfactedClient) -> Result<()> {
    /// let envelope = client
    ///     .request(Method::GET, "/facts", RequestOptions::new().query("page", 2))
    ///     .await?;
    /// println!("{}", envelope.data());
    /// # Ok(()) }
    /// ```
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Envelope> {
        let url = self.endpoint_url(endpoint, &options)?;
        tracing::debug!(%method, %url, "Sending PurFacted request");

        let mut rb = self.http.request(method.clone(), url.clone());
        if let Some(body) = &options.body {
            rb = rb.json(body);
        }

        let response = rb.send().await?;
        tracing::debug!(%method, %url, status = %response.status(), "Received PurFacted response");

        let envelope = decode_envelope(response).await?;
        envelope.into_result().inspect_err(|err| {
            if let crate::Error::Api(api) = err {
                tracing::warn!(code = %api.code, message = %api.message, %url, "PurFacted API reported an error");
            }
        })
    }

    /// Join `endpoint` onto the base URL and attach the query string.
    pub(crate) fn endpoint_url(&self, endpoint: &str, options: &RequestOptions) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        if !options.query.is_empty() {
            let mut q = url.query_pairs_mut();
            for (key, value) in &options.query {
                q.append_pair(key, value);
            }
        }
        Ok(url)
    }
}
