//! Error types for the Shlink client.

use thiserror::Error;

/// Errors that can occur when using the Shlink client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Failed to deserialize response.
    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Input rejected before any request was sent.
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
