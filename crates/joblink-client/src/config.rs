//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Environment variable holding the backend base URL.
pub const ENV_BASE_URL: &str = "JOBLINK_API_BASE_URL";

/// API client configuration.
///
/// The base URL is validated at construction: it must be an absolute
/// `http`/`https` URL with a host, and construction fails fast otherwise.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, trailing slash stripped
    pub base_url: Url,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    /// Connect timeout; `None` leaves the transport default in place
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build a config from an explicit base URL.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApiError::config("API base URL not configured"));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| ApiError::config(format!("Invalid API base URL {trimmed:?}: {e}")))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ApiError::config(format!(
                    "Invalid protocol in API base URL: {other}"
                )))
            }
        }

        if url.host_str().is_none() {
            return Err(ApiError::config("API base URL has no host"));
        }

        Ok(Self {
            base_url: url,
            timeout: None,
            connect_timeout: None,
        })
    }

    /// Create config from environment variables.
    ///
    /// `JOBLINK_API_BASE_URL` falls back to the development default;
    /// a set-but-malformed value is an error, not a fallback.
    pub fn from_env() -> ApiResult<Self> {
        let base_url = std::env::var(ENV_BASE_URL)
            .unwrap_or_else(|_| joblink_models::constants::defaults::API_BASE_URL.to_string());

        let mut config = Self::new(&base_url)?;
        config.timeout = env_secs("JOBLINK_HTTP_TIMEOUT_SECS");
        config.connect_timeout = env_secs("JOBLINK_CONNECT_TIMEOUT_SECS");
        Ok(config)
    }

    /// Base URL as a string with no trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

fn env_secs(name: &str) -> Option<Duration> {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
}
