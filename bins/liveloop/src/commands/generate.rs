//! `liveloop generate` — the full portrait → video (→ GIF) pipeline.

use anyhow::{Context, Result};
use liveloop_api_client::PortraitClient;
use liveloop_cli::output::{format_duration, format_size, Status};
use liveloop_cli::progress;
use liveloop_core::gallery::{Gallery, StoreKind};
use liveloop_image::validate_file;
use liveloop_transcode::{to_gif, FfmpegRuntime};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub async fn run(path: &Path, gif: bool, output: Option<PathBuf>, no_save: bool) -> Result<()> {
    let started = Instant::now();
    let total_steps = if gif { 3 } else { 2 };

    Status::step(1, total_steps, "Validating portrait");
    let portrait = validate_file(path)?;
    Status::info(&format!(
        "{}x{} {}",
        portrait.width,
        portrait.height,
        portrait.kind.mime_type()
    ));

    Status::step(2, total_steps, "Generating animation");
    let client = PortraitClient::new()?;
    let pb = progress::spinner("Creating your animated portrait...");
    let result = client
        .generate(&portrait, |phase| pb.set_message(phase.label().to_string()))
        .await;
    let video = match result {
        Ok(video) => {
            progress::finish_success(&pb, "Animation ready");
            video
        }
        Err(e) => {
            progress::finish_error(&pb, "Generation failed");
            return Err(e.into());
        }
    };

    let video_path = output.unwrap_or_else(|| path.with_extension("mp4"));
    std::fs::write(&video_path, &video)
        .with_context(|| format!("failed to write {}", video_path.display()))?;
    Status::success(&format!(
        "Wrote {} ({})",
        video_path.display(),
        format_size(video.len() as u64)
    ));

    if !no_save {
        let entry = Gallery::open_default(StoreKind::Videos)?.save(&video)?;
        Status::info(&format!("Saved to gallery as {}", entry.id));
    }

    if gif {
        Status::step(3, total_steps, "Converting to GIF");
        let gif_bytes = convert_video(&video)?;
        let gif_path = video_path.with_extension("gif");
        std::fs::write(&gif_path, &gif_bytes)
            .with_context(|| format!("failed to write {}", gif_path.display()))?;
        Status::success(&format!(
            "Wrote {} ({})",
            gif_path.display(),
            format_size(gif_bytes.len() as u64)
        ));

        if !no_save {
            let entry = Gallery::open_default(StoreKind::Gifs)?.save(&gif_bytes)?;
            Status::info(&format!("Saved to gallery as {}", entry.id));
        }
    }

    Status::info(&format!("Done in {}", format_duration(started.elapsed())));
    Ok(())
}

/// Run the fixed GIF conversion with a progress spinner.
pub(super) fn convert_video(video: &[u8]) -> Result<Vec<u8>> {
    let runtime = FfmpegRuntime::obtain()?;
    tracing::debug!(version = runtime.version(), "using ffmpeg runtime");

    let pb = progress::spinner("Converting to GIF...");
    let result = to_gif(&runtime, video, |message| pb.set_message(message.to_string()));
    match result {
        Ok(gif) => {
            progress::finish_success(&pb, "GIF ready");
            Ok(gif)
        }
        Err(e) => {
            progress::finish_error(&pb, "Conversion failed");
            Err(e.into())
        }
    }
}
