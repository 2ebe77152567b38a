//! Error types for the jobs client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during jobs client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing or malformed construction-time configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A request could not be signed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from the API.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status code carried by this error, if it came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is an HTTP 404.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check if this error indicates rejected or unusable credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth(_)) || matches!(self.status_code(), Some(401 | 403))
    }
}
