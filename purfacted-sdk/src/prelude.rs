//! Common imports for quick starts.

// Common
pub use crate::{ApiError, BuildError, Envelope, Error};

// Transport
pub use crate::{PurfactedClient, PurfactedClientBuilder, RequestOptions};

// Resource options
pub use crate::{CategoryQuery, FactSearch, NewWebhook, SourceQuery, WebhookUpdate};

// Typed payloads
pub use crate::models::{FactList, PlatformStats, TrustMetrics, Webhook};
