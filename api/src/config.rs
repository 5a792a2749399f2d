//! API configuration from environment variables.

use std::time::Duration;

/// Default server when `CLIENTBOOK_API_URL` is not set.
const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Server root, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Read the configuration from the environment.
    ///
    /// `CLIENTBOOK_API_URL` overrides the base URL and
    /// `CLIENTBOOK_API_TIMEOUT_SECS` the request timeout; both fall back to
    /// defaults when unset or malformed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("CLIENTBOOK_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("CLIENTBOOK_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
