//! Core utilities for the liveloop portrait animation tools
//!
//! This crate provides shared functionality used across the pipeline crates:
//!
//! - **Data URIs**: base64 data-URI encoding for image/video/gif payloads
//! - **Process execution**: safe command execution with captured output
//! - **Gallery storage**: durable JSON stores of past generation results
//!
//! # Example
//!
//! ```rust,no_run
//! use liveloop_core::gallery::{Gallery, StoreKind};
//!
//! let gallery = Gallery::open_default(StoreKind::Videos).expect("data dir");
//! for entry in gallery.load().expect("readable store") {
//!     println!("{} saved {}", entry.id, entry.created_at);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod data_uri;
pub mod error;
pub mod gallery;
pub mod process;

pub use error::{CoreError, Result};
