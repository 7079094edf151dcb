//! HTTP client for the Custom Search JSON API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::WebSearchConfig;

/// Outbound request timeout. A slow provider degrades the category rather
/// than stalling the whole request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One ranked result from the external provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
}

/// Errors internal to the client; callers never see these, they are logged
/// and mapped to an empty result list.
#[derive(Debug, thiserror::Error)]
enum WebSearchError {
    #[error("API credentials not configured")]
    MissingCredentials,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(u16),
}

/// Raw payload shape of the Custom Search JSON API.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    items: Vec<ProviderItem>,
}

#[derive(Debug, Deserialize)]
struct ProviderItem {
    #[serde(default)]
    title: String,
    link: Option<String>,
}

/// Convert provider items into hits, dropping items without a link.
fn hits_from_items(items: Vec<ProviderItem>) -> Vec<SearchHit> {
    items
        .into_iter()
        .filter_map(|item| {
            item.link.filter(|l| !l.is_empty()).map(|url| SearchHit {
                title: item.title,
                url,
            })
        })
        .collect()
}

/// Best-effort client for one external search provider.
pub struct WebSearchClient {
    http: reqwest::Client,
    config: WebSearchConfig,
}

impl WebSearchClient {
    pub fn new(config: WebSearchConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { http, config }
    }

    /// General web results for a query, capped at `max_results`.
    pub async fn search_web(&self, query: &str, max_results: u8) -> Vec<SearchHit> {
        self.run("web", query, max_results, &[]).await
    }

    /// Image results for a query, capped at `max_results`.
    pub async fn search_images(&self, query: &str, max_results: u8) -> Vec<SearchHit> {
        self.run("image", query, max_results, &[("searchType", "image")])
            .await
    }

    /// Video results for a query, capped at `max_results`.
    ///
    /// The provider has no dedicated video search; results are restricted to
    /// youtube.com via `siteSearch`.
    pub async fn search_videos(&self, query: &str, max_results: u8) -> Vec<SearchHit> {
        self.run(
            "video",
            query,
            max_results,
            &[("siteSearch", "youtube.com"), ("siteSearchFilter", "i")],
        )
        .await
    }

    /// Execute one lookup, degrading any failure to an empty list.
    async fn run(
        &self,
        category: &'static str,
        query: &str,
        max_results: u8,
        extra_params: &[(&str, &str)],
    ) -> Vec<SearchHit> {
        match self.try_search(query, max_results, extra_params).await {
            Ok(hits) => hits,
            Err(err) => {
                tracing::warn!(category, query, error = %err, "External search degraded");
                Vec::new()
            }
        }
    }

    async fn try_search(
        &self,
        query: &str,
        max_results: u8,
        extra_params: &[(&str, &str)],
    ) -> Result<Vec<SearchHit>, WebSearchError> {
        let (Some(api_key), Some(cx)) = (&self.config.api_key, &self.config.cx) else {
            return Err(WebSearchError::MissingCredentials);
        };

        let num = max_results.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("key", api_key),
            ("cx", cx),
            ("q", query),
            ("hl", "ru"),
            ("gl", "BY"),
            ("num", &num),
        ];
        params.extend_from_slice(extra_params);

        let response = self
            .http
            .get(self.config.endpoint.as_str())
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebSearchError::Status(status.as_u16()));
        }

        let payload: ProviderResponse = response.json().await?;
        Ok(hits_from_items(payload.items))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
