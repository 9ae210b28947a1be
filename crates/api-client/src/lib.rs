//! Client for the Segmind LivePortrait animation API
//!
//! This crate is the second stage of the liveloop pipeline: it packages
//! a validated portrait plus the fixed LivePortrait parameter set into
//! one HTTPS request and returns the raw MP4 bytes the service replies
//! with.
//!
//! # Features
//!
//! - **Environment-based configuration**: API key, URL, and timeout from env vars
//! - **Fail-fast credential check**: a missing key never touches the network
//! - **Phase notifications**: preparing → generating → complete callbacks
//! - **Request correlation**: unique IDs per request for debugging
//!
//! One request per user action; the client never retries on its own.
//!
//! # Example
//!
//! ```rust,no_run
//! use liveloop_api_client::{ClientConfig, PortraitClient};
//! use liveloop_image::validate_file;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let portrait = validate_file("selfie.jpg")?;
//!
//!     let client = PortraitClient::new()?;
//!     let video = client
//!         .generate(&portrait, |phase| eprintln!("{}", phase.label()))
//!         .await?;
//!
//!     std::fs::write("animated.mp4", video)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod request;

pub use client::{GenerationPhase, PortraitClient};
pub use config::ClientConfig;
pub use error::{GenerationError, GenerationResult};
pub use request::LivePortraitRequest;
