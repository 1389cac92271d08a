//! HTTP client configuration.
//!
//! Configuration priority: explicit value > environment variable > default.

use std::env;
use std::time::Duration;

/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`HttpApiClient`](crate::HttpApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend origin, without a trailing slash requirement.
    pub base_url: String,
    /// Applied to every request.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Creates a config with an explicit base URL and the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the base URL from the `CLEARFEED_API_URL` environment
    /// variable, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            env::var("CLEARFEED_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
