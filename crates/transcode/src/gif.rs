//! The fixed MP4 → GIF conversion command.

use crate::error::{Result, TranscodeError};
use crate::progress::ProgressParser;
use crate::runtime::FfmpegRuntime;
use std::io::Read;
use std::process::{Command, Stdio};
use tracing::debug;

/// Scratch file names, fixed across calls.
const INPUT_NAME: &str = "input.mp4";
const OUTPUT_NAME: &str = "output.gif";

/// Number of trailing stderr lines kept for error reports.
const STDERR_TAIL_LINES: usize = 12;

/// GIF conversion parameters.
///
/// The defaults are the pipeline's fixed filter chain; height is always
/// derived from the width to preserve aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct GifOptions {
    /// Output frame rate
    pub fps: u32,
    /// Output width in pixels
    pub width: u32,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self { fps: 12, width: 320 }
    }
}

impl GifOptions {
    fn filter(&self) -> String {
        format!("fps={},scale={}:-1", self.fps, self.width)
    }
}

/// Convert MP4 bytes to a looping GIF with the fixed filter chain
/// (12 fps, 320 px wide).
///
/// `on_progress` receives advisory `"Converting: NN%"` messages parsed
/// from the codec's own stats; a 100% message does not imply success —
/// only the returned bytes do. Scratch files never survive the call,
/// whether it succeeds or fails.
pub fn to_gif(
    runtime: &FfmpegRuntime,
    video: &[u8],
    on_progress: impl FnMut(&str),
) -> Result<Vec<u8>> {
    to_gif_with_options(runtime, video, GifOptions::default(), on_progress)
}

/// Convert MP4 bytes to a GIF with explicit options.
pub fn to_gif_with_options(
    runtime: &FfmpegRuntime,
    video: &[u8],
    options: GifOptions,
    mut on_progress: impl FnMut(&str),
) -> Result<Vec<u8>> {
    // TempDir removes the scratch files on drop, covering every early
    // return below.
    let scratch = tempfile::Builder::new()
        .prefix("liveloop-transcode")
        .tempdir()?;
    let input = scratch.path().join(INPUT_NAME);
    let output = scratch.path().join(OUTPUT_NAME);

    std::fs::write(&input, video).map_err(TranscodeError::Write)?;

    debug!(filter = %options.filter(), bytes = video.len(), "starting gif conversion");
    let mut child = Command::new(runtime.binary())
        .arg("-y")
        .arg("-i")
        .arg(&input)
        .args(["-vf", &options.filter(), "-f", "gif"])
        .arg(&output)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;

    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| TranscodeError::Io(std::io::Error::other("ffmpeg stderr not captured")))?;
    let tail = pump_stderr(stderr, &mut on_progress);

    let status = child.wait()?;
    if !status.success() {
        return Err(TranscodeError::Exec {
            status: status.code().unwrap_or(-1),
            stderr: tail.join("\n"),
        });
    }

    let gif = std::fs::read(&output).map_err(TranscodeError::Read)?;
    debug!(bytes = gif.len(), "gif conversion finished");

    // Explicit removal mirrors the guaranteed-cleanup contract; the
    // TempDir drop is the backstop.
    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
    drop(scratch);

    Ok(gif)
}

/// Stream ffmpeg stderr, feeding the progress parser and keeping the
/// last few lines for error reports.
///
/// ffmpeg terminates stats updates with carriage returns, so lines are
/// split on both `\r` and `\n`.
fn pump_stderr(mut stderr: impl Read, on_progress: &mut impl FnMut(&str)) -> Vec<String> {
    let mut parser = ProgressParser::new();
    let mut tail: Vec<String> = Vec::new();
    let mut pending = String::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = match stderr.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(_) => break,
        };
        pending.push_str(&String::from_utf8_lossy(&buf[..n]));

        while let Some(split) = pending.find(['\r', '\n']) {
            let line: String = pending.drain(..=split).collect();
            handle_line(line.trim_end_matches(['\r', '\n']), &mut parser, &mut tail, on_progress);
        }
    }
    if !pending.is_empty() {
        handle_line(&pending, &mut parser, &mut tail, on_progress);
    }
    tail
}

fn handle_line(
    line: &str,
    parser: &mut ProgressParser,
    tail: &mut Vec<String>,
    on_progress: &mut impl FnMut(&str),
) {
    if line.is_empty() {
        return;
    }
    if let Some(message) = parser.feed(line) {
        on_progress(&message);
    }
    if tail.len() == STDERR_TAIL_LINES {
        tail.remove(0);
    }
    tail.push(line.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_chain() {
        assert_eq!(GifOptions::default().filter(), "fps=12,scale=320:-1");
    }

    #[test]
    fn test_pump_splits_on_carriage_returns() {
        let transcript = b"  Duration: 00:00:02.00, start: 0.0\nframe=1 time=00:00:01.00 x\rframe=2 time=00:00:02.00 x\r".to_vec();
        let mut messages = Vec::new();
        let tail = pump_stderr(&transcript[..], &mut |m: &str| messages.push(m.to_string()));

        assert_eq!(messages, vec!["Converting: 50%", "Converting: 100%"]);
        assert_eq!(tail.len(), 3);
    }

    #[test]
    fn test_tail_is_bounded() {
        let transcript: Vec<u8> = (0..50)
            .map(|i| format!("line {i}\n"))
            .collect::<String>()
            .into_bytes();
        let tail = pump_stderr(&transcript[..], &mut |_| {});
        assert_eq!(tail.len(), STDERR_TAIL_LINES);
        assert_eq!(tail.last().unwrap(), "line 49");
    }
}
