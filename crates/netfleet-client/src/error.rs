//! Error types for the netfleet client

use thiserror::Error;

/// Errors that can occur when talking to the device-management API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connect, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Login was rejected by the remote service
    #[error("authentication failed ({status}): {message}")]
    AuthenticationFailed {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },

    /// API returned an error status on an authenticated call
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },

    /// Operation requires a session but no login has succeeded
    #[error("no active session")]
    NotAuthenticated,

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
