//! Lazy, at-most-once ffmpeg runtime handle.

use crate::error::{Result, TranscodeError};
use liveloop_core::process;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Process-wide cache for [`FfmpegRuntime::obtain`]. Stays vacant when a
/// probe fails so a later call can retry cleanly.
static SHARED: Mutex<Option<Arc<FfmpegRuntime>>> = Mutex::new(None);

/// A verified ffmpeg installation.
///
/// Probing locates the binary and runs `-version` once; the handle is
/// then reused for every transcode. Handles are passed explicitly into
/// [`crate::to_gif`] rather than read from ambient state, so tests can
/// inject their own.
#[derive(Debug)]
pub struct FfmpegRuntime {
    binary: PathBuf,
    version: String,
}

impl FfmpegRuntime {
    /// Locate and verify ffmpeg, creating a fresh handle.
    ///
    /// Honors `LIVELOOP_FFMPEG` as a binary override, falling back to a
    /// PATH lookup.
    pub fn probe() -> Result<Arc<Self>> {
        let binary = match std::env::var_os("LIVELOOP_FFMPEG") {
            Some(path) => PathBuf::from(path),
            None => process::which_command("ffmpeg").ok_or_else(|| {
                TranscodeError::RuntimeLoad(
                    "ffmpeg not found on PATH (install ffmpeg or set LIVELOOP_FFMPEG)".into(),
                )
            })?,
        };

        let result = process::run_command(&binary, &["-version"])
            .map_err(|e| TranscodeError::RuntimeLoad(e.to_string()))?;
        if !result.success {
            return Err(TranscodeError::RuntimeLoad(format!(
                "'{}' -version exited with code {}",
                binary.display(),
                result.exit_code
            )));
        }

        let version = result
            .stdout
            .lines()
            .next()
            .unwrap_or("ffmpeg (unknown version)")
            .to_string();
        debug!(binary = %binary.display(), version = %version, "ffmpeg runtime ready");

        Ok(Arc::new(Self { binary, version }))
    }

    /// Get the process-wide shared runtime, probing on first use.
    ///
    /// The probe runs at most once per process lifetime; on failure the
    /// cache stays empty so the next call retries from scratch.
    pub fn obtain() -> Result<Arc<Self>> {
        let mut shared = SHARED.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(runtime) = shared.as_ref() {
            return Ok(Arc::clone(runtime));
        }

        let runtime = Self::probe()?;
        *shared = Some(Arc::clone(&runtime));
        Ok(runtime)
    }

    /// Path to the verified ffmpeg binary.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// First line of `ffmpeg -version` output.
    pub fn version(&self) -> &str {
        &self.version
    }
}
