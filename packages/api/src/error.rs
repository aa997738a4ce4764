use thiserror::Error;

/// Maximum number of error-body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Errors produced by the portal API client. `Clone` so a failure can live
/// inside a view signal.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// Missing, invalid, or expired credentials (HTTP 401/403).
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this failure invalidates the stored session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Trims and bounds an HTTP error body for user-facing messages.
pub(crate) fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
