//! Error types for the animation client

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Animation client errors
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No API key configured; checked before any network I/O
    #[error("API key is not configured (set SEGMIND_API_KEY)")]
    MissingCredential,

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API (server-supplied when available)
        message: String,
    },

    /// Response arrived but was not a binary video payload
    #[error("Invalid response format from API: {0}")]
    MalformedResponse(String),

    /// Request exceeded the configured deadline
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GenerationError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }
}
