//! Error types for portrait validation.

use thiserror::Error;

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that can occur while validating a portrait image.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Input is not a supported image format
    #[error("File must be a JPEG or PNG image")]
    NotAnImage,

    /// Either dimension is below the minimum
    #[error("Image must be at least {min}x{min} pixels (got {width}x{height})", min = crate::MIN_DIMENSION)]
    TooSmall {
        /// Actual pixel width
        width: u32,
        /// Actual pixel height
        height: u32,
    },

    /// Either dimension exceeds the maximum
    #[error("Image must be smaller than {max}x{max} pixels (got {width}x{height})", max = crate::MAX_DIMENSION)]
    TooLarge {
        /// Actual pixel width
        width: u32,
        /// Actual pixel height
        height: u32,
    },

    /// File could not be read at all
    #[error("Failed to read file: {0}")]
    UnreadableFile(std::io::Error),

    /// Bytes declared an image type but failed to decode
    #[error("Invalid image file: {0}")]
    Decode(#[from] image::ImageError),
}
