//! Client configuration

use std::time::Duration;

use url::Url;

use crate::Result;

/// Environment variable overriding the backend base URL.
pub const API_BASE_ENV: &str = "LINKSHORT_API_BASE";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Fixed per-request timeout; the backend owns anything slower.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(8000);

/// Construction-time knobs for [`crate::ApiClient`]; not runtime-mutable.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Resolve the base URL from the environment, falling back to the
    /// local default.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(Url::parse(&raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_fixed_timeout() {
        let config = ApiConfig::new(Url::parse("http://localhost:8000").unwrap());
        assert_eq!(config.timeout, Duration::from_millis(8000));
    }
}
