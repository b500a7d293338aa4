#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(any(), deny(clippy::unwrap_used))]

pub mod blocking;
mod client;
mod envelope;
pub mod errors;
mod global;
pub mod models;
mod resources;
mod util;

pub mod prelude;

// --- PUBLIC API EXPORTS ---
// Transport
pub use client::core::{
    API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, PurfactedClient, PurfactedClientBuilder,
};
pub use client::request::RequestOptions;
pub use envelope::{Envelope, ErrorBody};

// Resource options
pub use resources::categories::CategoryQuery;
pub use resources::facts::FactSearch;
pub use resources::sources::SourceQuery;
pub use resources::trust::MAX_BATCH_TRUST_IDS;
pub use resources::webhooks::{NewWebhook, WebhookUpdate};
pub use resources::{DEFAULT_CATEGORY_LIMIT, DEFAULT_LIMIT, DEFAULT_PAGE};

// Error and global client
pub use errors::{ApiError, BuildError, Error, Result};
pub use global::{drop_global_client, global_client, set_global_client};

// Re-exports
pub use reqwest::{Method, StatusCode};
