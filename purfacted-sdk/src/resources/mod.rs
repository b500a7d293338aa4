//! One module per API resource. Each adds its operations to [`crate::PurfactedClient`]
//! and defines the option structs that shape their query strings and bodies.

pub mod categories;
pub mod facts;
pub mod sources;
pub mod trust;
pub mod webhooks;

/// Default page requested by the listing operations.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for facts and sources.
pub const DEFAULT_LIMIT: u32 = 20;

/// Default page size for categories.
pub const DEFAULT_CATEGORY_LIMIT: u32 = 50;

/// Empty strings are treated like unset filters and never reach the query string.
pub(crate) fn filter(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
