//! Portrait image validation and normalization.
//!
//! This crate is the first stage of the liveloop pipeline:
//! - Format detection from magic bytes (declared types are not trusted)
//! - True-dimension checks by actually decoding the image
//! - Re-encoding as a MIME-tagged base64 data URI for transport

#![warn(missing_docs)]

mod detect;
mod error;
mod validate;

pub use detect::{detect_kind, ImageKind};
pub use error::{Result, ValidationError};
pub use validate::{validate_bytes, validate_file, NormalizedImage, MAX_DIMENSION, MIN_DIMENSION};
