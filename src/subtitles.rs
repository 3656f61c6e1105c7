//! SubRip and WebVTT serializers.
//!
//! Every cue is terminated by a blank line, so an empty transcript yields
//! `""` for SRT and just the header block for WebVTT.

use crate::error::FormatError;
use crate::timestamp::{format_millis, seconds_to_millis, TimestampStyle};
use crate::TranscriptSegment;

const WEBVTT_HEADER: &str = "WEBVTT";

pub fn to_vtt(segments: &[TranscriptSegment]) -> Result<String, FormatError> {
    let mut out = String::new();
    out.push_str(WEBVTT_HEADER);
    out.push_str("\n\n");

    for (index, segment) in segments.iter().enumerate() {
        push_cue(&mut out, index, segment, TimestampStyle::WebVtt)?;
    }

    log::debug!("rendered {} WebVTT cues", segments.len());
    Ok(out)
}

/// Cue numbers are assigned here, starting at 1 in input order.
pub fn to_srt(segments: &[TranscriptSegment]) -> Result<String, FormatError> {
    let mut out = String::new();

    for (index, segment) in segments.iter().enumerate() {
        out.push_str(&(index + 1).to_string());
        out.push('\n');
        push_cue(&mut out, index, segment, TimestampStyle::Srt)?;
    }

    log::debug!("rendered {} SRT cues", segments.len());
    Ok(out)
}

fn push_cue(
    out: &mut String,
    index: usize,
    segment: &TranscriptSegment,
    style: TimestampStyle,
) -> Result<(), FormatError> {
    segment.validate(index)?;

    let start = format_millis(seconds_to_millis(segment.start)?, style);
    let end = format_millis(seconds_to_millis(segment.end)?, style);

    out.push_str(&format!("{start} --> {end}\n{}\n\n", cue_text(&segment.text)));
    Ok(())
}

/// Trims the text and drops blank lines inside it, since a blank line ends
/// the cue in both formats.
fn cue_text(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
