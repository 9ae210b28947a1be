//! Dimension checks and data-URI normalization.

use crate::detect::{detect_kind, ImageKind};
use crate::error::{Result, ValidationError};
use liveloop_core::data_uri;
use serde::Serialize;
use std::path::Path;

/// Minimum accepted width/height in pixels.
pub const MIN_DIMENSION: u32 = 256;

/// Maximum accepted width/height in pixels.
pub const MAX_DIMENSION: u32 = 2048;

/// A validated portrait, re-encoded for transport.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedImage {
    /// MIME-tagged base64 data URI of the original bytes
    pub data_uri: String,
    /// True pixel width (measured by decoding, not declared)
    pub width: u32,
    /// True pixel height
    pub height: u32,
    /// Detected source format
    pub kind: ImageKind,
}

impl NormalizedImage {
    /// The raw base64 payload without the data-URI prefix.
    pub fn raw_base64(&self) -> &str {
        data_uri::strip_image_prefix(&self.data_uri)
    }
}

/// Validate portrait bytes and normalize them for transport.
///
/// The bytes must sniff as JPEG or PNG and decode successfully; the
/// decoded dimensions must both lie in
/// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`]. On success the original bytes
/// are returned re-encoded as a data URI. The decode buffer is dropped
/// before re-encoding on every path.
pub fn validate_bytes(data: &[u8]) -> Result<NormalizedImage> {
    let kind = detect_kind(data)?;

    // Measure true dimensions by decoding; the magic bytes only tell us
    // the container, not that the payload is intact.
    let decoded = image::load_from_memory(data)?;
    let (width, height) = (decoded.width(), decoded.height());
    drop(decoded);

    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(ValidationError::TooSmall { width, height });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ValidationError::TooLarge { width, height });
    }

    Ok(NormalizedImage {
        data_uri: data_uri::encode(kind.mime_type(), data),
        width,
        height,
        kind,
    })
}

/// Validate a portrait file on disk.
pub fn validate_file(path: impl AsRef<Path>) -> Result<NormalizedImage> {
    let data = std::fs::read(path.as_ref()).map_err(ValidationError::UnreadableFile)?;
    validate_bytes(&data)
}
