//! `liveloop convert` — standalone MP4 → GIF conversion.

use anyhow::{Context, Result};
use liveloop_cli::output::{format_size, Status};
use std::path::{Path, PathBuf};

pub fn run(path: &Path, output: Option<PathBuf>) -> Result<()> {
    let video =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let gif = super::generate::convert_video(&video)?;

    let gif_path = output.unwrap_or_else(|| path.with_extension("gif"));
    std::fs::write(&gif_path, &gif)
        .with_context(|| format!("failed to write {}", gif_path.display()))?;
    Status::success(&format!(
        "Wrote {} ({})",
        gif_path.display(),
        format_size(gif.len() as u64)
    ));

    Ok(())
}
