//! Error types shared by the core utilities.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors from the core utilities.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input was not a well-formed data URI
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Base64 payload failed to decode
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// External command could not be executed
    #[error("Process error: {0}")]
    Process(String),

    /// Gallery store could not be read or written
    #[error("Gallery storage error: {0}")]
    Storage(String),

    /// No entry with the requested id exists
    #[error("No gallery entry with id {0}")]
    EntryNotFound(u64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a process error
    pub fn process(msg: impl Into<String>) -> Self {
        Self::Process(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
