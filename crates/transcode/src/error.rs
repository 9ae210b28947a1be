//! Error types for the transcoder.

use thiserror::Error;

/// Result type alias for transcode operations.
pub type Result<T> = std::result::Result<T, TranscodeError>;

/// Errors that can occur while converting video to GIF.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The ffmpeg runtime could not be located or verified
    #[error("Failed to load ffmpeg runtime: {0}")]
    RuntimeLoad(String),

    /// Input bytes could not be written into the scratch directory
    #[error("Failed to write transcode input: {0}")]
    Write(std::io::Error),

    /// ffmpeg ran but did not produce a GIF
    #[error("ffmpeg exited with status {status}: {stderr}")]
    Exec {
        /// Process exit code (-1 when killed by a signal)
        status: i32,
        /// Tail of ffmpeg's stderr output
        stderr: String,
    },

    /// Output GIF could not be read back
    #[error("Failed to read transcode output: {0}")]
    Read(std::io::Error),

    /// Scratch directory or process plumbing failure
    #[error("Transcode IO error: {0}")]
    Io(#[from] std::io::Error),
}
