//! Global, resettable `PurfactedClient` configured from the environment.
//!
//! Scripts and small services often want a one-liner instead of threading a client
//! through every call site. [`global_client`] lazily builds one from
//! `PURFACTED_API_KEY` / `PURFACTED_BASE_URL` (see
//! [`crate::PurfactedClientBuilder::from_env`]) and hands out cheap clones sharing
//! the same connection pool.
//!
//! # Design
//! - Backing storage is `ArcSwapOption<PurfactedClient>` inside a `OnceLock`.
//! - **Reads are lock-free**; `global_client()` does a single atomic load and returns a
//!   clone of the current `PurfactedClient`.
//! - **Reset is safe**; `set_global_client`/`drop_global_client` publish a new instance
//!   (or `None`). Existing clones keep working independently.
//! - **Init is fallible** and returns `BuildError` (e.g. no API key in the environment)
//!   instead of panicking.
//!
//! # Concurrency and races
//! - If multiple threads call `global_client()` concurrently before initialization, more
//!   than one `PurfactedClient` may be constructed; the last stored wins.
//!
//! # Examples
//! Inject an explicit client, then fetch it anywhere:
//! ```
//! # use purfacted::{global_client, set_global_client, PurfactedClient};
//! set_global_client(PurfactedClient::new("pk_test_123")?);
//! let client = global_client()?;
//! # Ok::<(), purfacted::BuildError>(())
//! ```
//!
//! Reset to “no client”; the next call re-reads the environment:
//! ```
//! # use purfacted::drop_global_client;
//! drop_global_client();
//! ```

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::sync::OnceLock;

use crate::{BuildError, PurfactedClient, PurfactedClientBuilder};

/// Process-wide slot for the optional default client.
static GLOBAL_CLIENT: OnceLock<ArcSwapOption<PurfactedClient>> = OnceLock::new();

#[inline]
fn slot() -> &'static ArcSwapOption<PurfactedClient> {
    GLOBAL_CLIENT.get_or_init(|| ArcSwapOption::from(None))
}

/// Get-or-init the process-wide default client.
///
/// - On first use, constructs via [`PurfactedClientBuilder::from_env`].
/// - Subsequent calls are lock-free and just clone the current instance.
/// - Clones remain valid even if you later call `set_global_client` or `drop_global_client`.
pub fn global_client() -> Result<PurfactedClient, BuildError> {
    if let Some(current) = slot().load_full() {
        return Ok(current.as_ref().clone());
    }

    let fresh = PurfactedClientBuilder::from_env().build()?;
    slot().store(Some(Arc::new(fresh.clone())));
    Ok(fresh)
}

/// Replace the global default client.
pub fn set_global_client(new_client: PurfactedClient) {
    slot().store(Some(Arc::new(new_client)));
}

/// Clear the global default client.
///
/// After this call, the next `global_client()` builds a fresh client from the environment.
pub fn drop_global_client() {
    slot().store(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_injected_client() {
        let client = PurfactedClient::builder()
            .api_key("global-key")
            .base_url("http://localhost:7777/api/v1")
            .build()
            .unwrap();
        set_global_client(client);

        let fetched = global_client().unwrap();
        assert_eq!(fetched.base_url(), "http://localhost:7777/api/v1");
    }
}
