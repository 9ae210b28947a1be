//! End-to-end GIF conversion against a real ffmpeg, skipped cleanly
//! when the binary is not installed.

use liveloop_transcode::{to_gif, FfmpegRuntime, TranscodeError};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;

fn ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Synthesize a 2-second test clip.
fn synth_mp4(dir: &std::path::Path) -> Vec<u8> {
    let path = dir.join("clip.mp4");
    let status = Command::new("ffmpeg")
        .args([
            "-v",
            "error",
            "-y",
            "-f",
            "lavfi",
            "-i",
            "testsrc=size=64x64:rate=24",
            "-t",
            "2",
            "-pix_fmt",
            "yuv420p",
        ])
        .arg(&path)
        .status()
        .expect("spawn ffmpeg");
    assert!(status.success(), "ffmpeg failed creating clip.mp4");
    std::fs::read(&path).unwrap()
}

/// Scratch directories the transcoder may have left behind.
fn scratch_dirs() -> BTreeSet<PathBuf> {
    std::fs::read_dir(std::env::temp_dir())
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("liveloop-transcode"))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn gif_pipeline() {
    if !ffmpeg_available() {
        eprintln!("skipping: ffmpeg not on PATH");
        return;
    }

    let workdir = tempfile::tempdir().unwrap();
    let video = synth_mp4(workdir.path());
    let preexisting = scratch_dirs();

    // One runtime shared across every call in this test.
    let runtime = FfmpegRuntime::obtain().unwrap();
    assert!(Arc::ptr_eq(&runtime, &FfmpegRuntime::obtain().unwrap()));

    // First conversion: valid GIF out, parseable progress in.
    let mut messages = Vec::new();
    let gif = to_gif(&runtime, &video, |m| messages.push(m.to_string())).unwrap();
    assert!(
        gif.starts_with(b"GIF89a") || gif.starts_with(b"GIF87a"),
        "output is not a GIF"
    );
    for message in &messages {
        let percent: u8 = message
            .strip_prefix("Converting: ")
            .and_then(|m| m.strip_suffix('%'))
            .expect("unexpected progress format")
            .parse()
            .expect("percent not numeric");
        assert!(percent <= 100);
    }

    // Second conversion of the same bytes is deterministic.
    let gif_again = to_gif(&runtime, &video, |_| {}).unwrap();
    assert_eq!(gif, gif_again, "fixed command must be deterministic");

    // Junk input fails with a transcode error, never a partial GIF.
    let err = to_gif(&runtime, &[0u8; 10], |_| {}).unwrap_err();
    assert!(matches!(err, TranscodeError::Exec { .. }), "got {err:?}");

    // No scratch files survive any of the calls above.
    let leftover: Vec<_> = scratch_dirs().difference(&preexisting).cloned().collect();
    assert!(leftover.is_empty(), "scratch residue: {leftover:?}");
}
