//! Configuration for the research portal client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Default portal origin. The `/api/...` paths are appended to it.
    pub const BASE_URL: &str = "http://localhost:5000";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Retries for transient failures (5xx, connect errors).
    pub const MAX_RETRIES: u32 = 2;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Pagination and rendering constants.
pub mod paging {
    /// Page size of a freshly opened view.
    pub const INITIAL_PAGE_SIZE: u32 = 10;

    /// Page size growth per "show more".
    pub const PAGE_SIZE_INCREMENT: u32 = 10;

    /// Number of entries requested for the top-treatments sidebar.
    pub const TOP_TREATMENTS_SIZE: u32 = 10;

    /// Characters of summary shown before truncation.
    pub const SUMMARY_PREVIEW_CHARS: usize = 300;

    /// Keywords shown per paper card.
    pub const MAX_KEYWORDS: usize = 5;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal origin, e.g. `https://covid.example.org`.
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Retries for transient failures.
    pub max_retries: u32,

    /// Show debug-only details (similarity distance) on paper cards.
    pub debug: bool,

    /// Reset page size to the initial value whenever a filter toggles.
    pub reset_size_on_filter_change: bool,
}

impl Config {
    /// Create a new configuration for the given portal origin.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            debug: false,
            reset_size_on_filter_change: false,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0, // Failures surface immediately in tests
            debug: false,
            reset_size_on_filter_change: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `PORTAL_API_URL` and `PORTAL_DEBUG`.
    ///
    /// # Errors
    ///
    /// Returns error if `PORTAL_API_URL` is not a valid http(s) URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            std::env::var("PORTAL_API_URL").unwrap_or_else(|_| api::BASE_URL.to_string());
        let mut config = Self::new(base_url);
        config.validate()?;

        config.debug = std::env::var("PORTAL_DEBUG")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(config)
    }

    /// Check that the base URL parses as an http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns error describing the offending URL.
    pub fn validate(&self) -> anyhow::Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("invalid portal URL '{}': {e}", self.base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("portal URL must be http or https, got '{}'", parsed.scheme());
        }
        Ok(())
    }

    /// Full URL of an API endpoint path such as `/api/healthcheck`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::BASE_URL)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, api::BASE_URL);
        assert!(!config.debug);
        assert!(!config.reset_size_on_filter_change);
        assert_eq!(config.max_retries, api::MAX_RETRIES);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::new("https://portal.example.org/");
        assert_eq!(config.endpoint("/api/healthcheck"), "https://portal.example.org/api/healthcheck");
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        assert!(Config::new("ftp://portal.example.org").validate().is_err());
        assert!(Config::new("not a url").validate().is_err());
        assert!(Config::new("https://portal.example.org").validate().is_ok());
    }

    #[test]
    fn test_testing_config_disables_retries() {
        let config = Config::for_testing("http://127.0.0.1:1234");
        assert_eq!(config.max_retries, 0);
    }
}
