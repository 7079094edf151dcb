//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the catalog listing (`?q=&sort=`).
///
/// `sort` is kept as a raw string; unrecognized values fall back to the
/// default date ordering when parsed into a sort key.
#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    pub q: Option<String>,
    pub sort: Option<String>,
}

/// Query parameters for the combined search view (`?q=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
