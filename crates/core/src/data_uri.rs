//! Base64 data-URI encoding for media payloads.
//!
//! Image, video, and GIF payloads travel through the pipeline as
//! MIME-tagged data URIs (`data:<mime>;base64,<payload>`), matching the
//! wire format the gallery stores and the remote API consumes.

use crate::error::{CoreError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Data-URI prefixes accepted when stripping image payloads.
const IMAGE_PREFIXES: &[&str] = &[
    "data:image/png;base64,",
    "data:image/jpeg;base64,",
    "data:image/jpg;base64,",
];

/// Encode raw bytes as a MIME-tagged base64 data URI.
pub fn encode(mime: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}

/// Strip the data-URI prefix from an image payload, returning the raw
/// base64 string.
///
/// A bare base64 string (no recognized prefix) is returned unchanged,
/// matching the tolerant behavior the remote API expects.
pub fn strip_image_prefix(data_uri: &str) -> &str {
    for prefix in IMAGE_PREFIXES {
        if let Some(rest) = data_uri.strip_prefix(prefix) {
            return rest;
        }
    }
    data_uri
}

/// Decode a data URI back into its MIME type and raw bytes.
pub fn decode(data_uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = data_uri
        .strip_prefix("data:")
        .ok_or_else(|| CoreError::InvalidDataUri("missing 'data:' scheme".into()))?;

    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| CoreError::InvalidDataUri("missing ';base64,' separator".into()))?;

    if mime.is_empty() {
        return Err(CoreError::InvalidDataUri("empty MIME type".into()));
    }

    let bytes = STANDARD.decode(payload)?;
    Ok((mime.to_string(), bytes))
}

/// Check whether a string carries the given data-URI prefix.
pub fn has_prefix(data_uri: &str, mime: &str) -> bool {
    data_uri.starts_with(&format!("data:{mime};base64,"))
}
