//! ffmpeg-backed MP4 → looping GIF transcoding.
//!
//! Third stage of the liveloop pipeline. The codec runtime (the system
//! ffmpeg binary) is probed lazily and at most once per process, then
//! reused across calls; each call writes its input into a private
//! scratch directory, runs one fixed filter/encode command, reads the
//! GIF back, and removes the scratch files on every path.
//!
//! # Example
//!
//! ```rust,no_run
//! use liveloop_transcode::{to_gif, FfmpegRuntime};
//!
//! let runtime = FfmpegRuntime::obtain()?;
//! let video = std::fs::read("animated.mp4")?;
//! let gif = to_gif(&runtime, &video, |msg| eprintln!("{msg}"))?;
//! std::fs::write("animated.gif", gif)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod error;
mod gif;
mod progress;
mod runtime;

pub use error::{Result, TranscodeError};
pub use gif::{to_gif, to_gif_with_options, GifOptions};
pub use runtime::FfmpegRuntime;
