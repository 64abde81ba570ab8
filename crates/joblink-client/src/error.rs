//! Client error types.

use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the API client.
///
/// Every asynchronous action resolves to one of these kinds; none are
/// silently discarded. Validation errors are raised locally and block
/// submission before any network call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session expired. Please login again.")]
    SessionExpired,

    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a `RequestFailed` from a non-2xx response body.
    ///
    /// The server-supplied `message`/`error`/`detail` field is surfaced
    /// verbatim when present; otherwise a generic message carries the status.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error", "detail"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_string))
            })
            .unwrap_or_else(|| format!("Request failed: {status}"));

        Self::RequestFailed { status, message }
    }

    /// HTTP status associated with the error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ApiError::SessionExpired => Some(401),
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the error means the stored session is gone and the caller
    /// should force re-authentication.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<joblink_models::UploadError> for ApiError {
    fn from(error: joblink_models::UploadError) -> Self {
        Self::Validation(error.to_string())
    }
}
