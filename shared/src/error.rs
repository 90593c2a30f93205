//! Client-side error taxonomy for API calls.
//!
//! The coordinator classifies every failed request into one of these buckets
//! and embeds the result in the response envelope instead of letting it
//! escape; only user-record lookups surface the `Result` to the caller.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Classified failure of an API request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response, connection-level failure, or timeout.
    #[error("network error: {0}")]
    Network(String),
    /// 401/403: missing, invalid, or expired token, or bad credentials.
    #[error("authentication error: {0}")]
    Authentication(String),
    /// 400: malformed input rejected by the server.
    #[error("validation error: {0}")]
    Validation(String),
    /// Any other HTTP error status (404/409/429/5xx and friends).
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    /// Non-HTTP failure (decode error, unexpected body shape).
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    /// Classify an HTTP error status into the taxonomy.
    #[must_use]
    pub fn from_status(status: u16, message: &str) -> Self {
        match status {
            400 => Self::Validation(message.to_owned()),
            401 | 403 => Self::Authentication(message.to_owned()),
            408 | 502 | 503 | 504 => Self::Network(message.to_owned()),
            _ => Self::Http { status, message: message.to_owned() },
        }
    }

    /// HTTP status to report in a response envelope for this error.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Network(_) => 503,
            Self::Authentication(_) => 401,
            Self::Validation(_) => 400,
            Self::Http { status, .. } => *status,
            Self::Other(_) => 500,
        }
    }

    /// Human-readable message for UI rendering.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Network(m) | Self::Authentication(m) | Self::Validation(m) | Self::Other(m) => m.clone(),
            Self::Http { message, .. } => message.clone(),
        }
    }
}
