//! Conversion progress parsed from ffmpeg's stderr stream.
//!
//! ffmpeg prints the input duration once in its banner and then
//! `time=HH:MM:SS.cc` stats ticks while encoding. The ratio of the two
//! is the completion estimate the original runtime reported. Ticks are
//! advisory: completion is decided by the output read succeeding, never
//! by a 100% message.

/// Incremental parser over ffmpeg stderr lines.
#[derive(Debug, Default)]
pub(crate) struct ProgressParser {
    duration_secs: Option<f64>,
    last_percent: Option<u8>,
}

impl ProgressParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feed one stderr line. Returns a user-facing progress message when
    /// the line advances the estimate.
    pub(crate) fn feed(&mut self, line: &str) -> Option<String> {
        if self.duration_secs.is_none() {
            if let Some(rest) = line.trim_start().strip_prefix("Duration:") {
                let stamp = rest.trim_start().split([',', ' ']).next()?;
                self.duration_secs = parse_timestamp(stamp).filter(|d| *d > 0.0);
                return None;
            }
        }

        let duration = self.duration_secs?;
        let idx = line.find("time=")?;
        let stamp = line[idx + 5..].split_whitespace().next()?;
        let elapsed = parse_timestamp(stamp)?;

        let ratio = (elapsed / duration).clamp(0.0, 1.0);
        let percent = (ratio * 100.0).round() as u8;
        if self.last_percent == Some(percent) {
            return None;
        }
        self.last_percent = Some(percent);
        Some(format!("Converting: {percent}%"))
    }
}

/// Parse an `HH:MM:SS.cc` timestamp into seconds. `N/A` and malformed
/// stamps yield `None`.
fn parse_timestamp(stamp: &str) -> Option<f64> {
    let mut parts = stamp.split(':');
    let hours: f64 = parts.next()?.parse().ok()?;
    let minutes: f64 = parts.next()?.parse().ok()?;
    let seconds: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}
