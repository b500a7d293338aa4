use reqwest::Method;
use serde::Serialize;

use crate::{Envelope, PurfactedClient, RequestOptions, Result};

/// Body of [`PurfactedClient::create_webhook`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWebhook {
    /// Delivery URL.
    pub url: String,
    /// Events to subscribe to, e.g. `fact.status_changed`.
    pub events: Vec<String>,
}

impl NewWebhook {
    /// Subscribe `url` to `events`.
    pub fn new<U, I, E>(url: U, events: I) -> Self
    where
        U: Into<String>,
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        Self {
            url: url.into(),
            events: events.into_iter().map(Into::into).collect(),
        }
    }
}

/// Partial update for [`PurfactedClient::update_webhook`].
///
/// Fields left untouched are absent from the body rather than sent as `null`;
/// an empty update sends `{}`.
///
/// # Examples
/// ```
/// # use purfacted::WebhookUpdate;
/// let update = WebhookUpdate::new().is_active(false);
/// assert_eq!(
///     serde_json::to_value(&update).unwrap(),
///     serde_json::json!({"isActive": false})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct WebhookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_active: Option<bool>,
}

impl WebhookUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// New delivery URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Replace the subscribed events. An empty list is sent as `[]`.
    pub fn events<I, E>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.events = Some(events.into_iter().map(Into::into).collect());
        self
    }

    /// Enable or pause deliveries.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

impl PurfactedClient {
    /// List all webhooks for your API key.
    pub async fn list_webhooks(&self) -> Result<Envelope> {
        self.request(Method::GET, "/webhooks", RequestOptions::new())
            .await
    }

    /// Create a new webhook subscription.
    ///
    /// The returned `data.secret` is only shown once.
    ///
    /// # Examples
    /// ```no_run
    /// # use purfacted::{NewWebhook, PurfactedClient, Result};
    /// # use purfacted::models::Webhook;
    /// # async fn run(client: PurfactedClient) -> Result<()> {
    /// let hook: Webhook = client
    ///     .create_webhook(&NewWebhook::new(
    ///         "https://your-server.com/webhook",
    ///         ["fact.status_changed", "fact.voted"],
    ///     ))
    ///     .await?
    ///     .data_as()?;
    /// println!("secret: {:?}", hook.secret);
    /// # Ok(()) }
    /// ```
    pub async fn create_webhook(&self, webhook: &NewWebhook) -> Result<Envelope> {
        let body = serde_json::to_value(webhook)?;
        self.request(Method::POST, "/webhooks", RequestOptions::new().json(body))
            .await
    }

    /// Get webhook details and delivery logs.
    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Envelope> {
        self.request(
            Method::GET,
            &format!("/webhooks/{webhook_id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// Update a webhook subscription, sending only the fields set on `update`.
    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        update: &WebhookUpdate,
    ) -> Result<Envelope> {
        let body = serde_json::to_value(update)?;
        self.request(
            Method::PATCH,
            &format!("/webhooks/{webhook_id}"),
            RequestOptions::new().json(body),
        )
        .await
    }

    /// Delete a webhook subscription.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Envelope> {
        self.request(
            Method::DELETE,
            &format!("/webhooks/{webhook_id}"),
            RequestOptions::new(),
        )
        .await
    }
}
