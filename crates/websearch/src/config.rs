/// External search provider configuration loaded from environment variables.
///
/// Credentials are optional on purpose: without them the client still
/// constructs and every lookup degrades to an empty result list.
#[derive(Debug, Clone)]
pub struct WebSearchConfig {
    /// API key (`GOOGLE_API_KEY`).
    pub api_key: Option<String>,
    /// Custom search engine ID (`GOOGLE_CX`).
    pub cx: Option<String>,
    /// Endpoint base URL. Overridable via `WEBSEARCH_ENDPOINT` for tests.
    pub endpoint: String,
}

/// Production endpoint of the Custom Search JSON API.
const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

impl WebSearchConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default                      |
    /// |----------------------|------------------------------|
    /// | `GOOGLE_API_KEY`     | unset (client degrades)      |
    /// | `GOOGLE_CX`          | unset (client degrades)      |
    /// | `WEBSEARCH_ENDPOINT` | Custom Search production URL |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GOOGLE_API_KEY").ok().filter(|v| !v.is_empty()),
            cx: std::env::var("GOOGLE_CX").ok().filter(|v| !v.is_empty()),
            endpoint: std::env::var("WEBSEARCH_ENDPOINT")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }

    /// A config with no credentials; every lookup returns empty results.
    /// Used by tests and as a safe fallback.
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            cx: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
