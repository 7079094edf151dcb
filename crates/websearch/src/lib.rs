//! Client for the external search provider (Google Custom Search JSON API).
//!
//! Augments combined search results with web, image, and video lookups.
//! The client is strictly best-effort: any failure — missing credentials,
//! network error, timeout, non-2xx status, malformed payload — degrades that
//! category to an empty result list. Nothing here ever surfaces an error to
//! the caller and nothing is retried.

mod client;
mod config;

pub use client::{SearchHit, WebSearchClient};
pub use config::WebSearchConfig;
