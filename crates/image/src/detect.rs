//! Image kind detection from magic bytes.

use crate::error::{Result, ValidationError};

/// Portrait source formats the remote animation service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
}

impl ImageKind {
    /// Get the MIME type for this kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
        }
    }
}

/// Detect the image kind from magic bytes.
///
/// Only JPEG and PNG are accepted as portrait sources; anything else,
/// including other real image formats, fails with
/// [`ValidationError::NotAnImage`].
///
/// # Example
/// ```
/// use liveloop_image::{detect_kind, ImageKind};
///
/// let png_magic = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
/// assert!(matches!(detect_kind(&png_magic), Ok(ImageKind::Png)));
/// ```
pub fn detect_kind(data: &[u8]) -> Result<ImageKind> {
    if data.len() < 4 {
        return Err(ValidationError::NotAnImage);
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Ok(ImageKind::Jpeg);
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Ok(ImageKind::Png);
    }

    Err(ValidationError::NotAnImage)
}
