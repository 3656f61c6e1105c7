//! Cue timestamps in the `HH:MM:SS<sep>mmm` shape shared by SRT and WebVTT.

use crate::error::FormatError;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_HOUR: u64 = 3_600_000;

/// Slack added before flooring so `1.001` does not land on `1000.999…` ms.
const FLOOR_TOLERANCE_MS: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    /// `00:00:02,500`
    Srt,
    /// `00:00:02.500`
    WebVtt,
}

impl TimestampStyle {
    pub fn millis_separator(self) -> char {
        match self {
            Self::Srt => ',',
            Self::WebVtt => '.',
        }
    }
}

/// Converts seconds to whole milliseconds, truncating any sub-millisecond part.
pub fn seconds_to_millis(seconds: f64) -> Result<u64, FormatError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(FormatError::InvalidTimestamp(seconds));
    }

    let millis = (seconds * MILLIS_PER_SECOND as f64 + FLOOR_TOLERANCE_MS).floor();
    // `as` saturates, so anything at or past 2^64 ms would clamp silently.
    if millis >= u64::MAX as f64 {
        return Err(FormatError::InvalidTimestamp(seconds));
    }

    Ok(millis as u64)
}

pub fn format_timestamp(seconds: f64, style: TimestampStyle) -> Result<String, FormatError> {
    Ok(format_millis(seconds_to_millis(seconds)?, style))
}

/// Hours are not wrapped at 24; they widen past two digits when needed.
pub fn format_millis(ms: u64, style: TimestampStyle) -> String {
    let hours = ms / MILLIS_PER_HOUR;
    let mins = (ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    let secs = (ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
    let millis = ms % MILLIS_PER_SECOND;
    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours,
        mins,
        secs,
        style.millis_separator(),
        millis
    )
}
