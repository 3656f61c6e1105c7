pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod inference;
pub mod subtitles;
pub mod timestamp;

use serde::{Deserialize, Serialize};

pub use config::ExportConfig;
pub use error::{BoxError, ConfigError, ExportError, FormatError, SegmentDefect};
pub use export::{Artifact, Exporter};
pub use format::OutputFormat;
pub use subtitles::{to_srt, to_vtt};
pub use timestamp::{format_timestamp, TimestampStyle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub segments: Option<Vec<TranscriptSegment>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Segment start time in seconds.
    pub start: f64,
    /// Segment end time in seconds.
    pub end: f64,
    /// Spoken text; surrounding whitespace is trimmed when emitted.
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Checks the segment can be emitted as a cue. `index` is only used for
    /// error reporting.
    pub fn validate(&self, index: usize) -> Result<(), FormatError> {
        let defect = if !self.start.is_finite() || !self.end.is_finite() {
            SegmentDefect::NonFinite {
                start: self.start,
                end: self.end,
            }
        } else if self.start < 0.0 {
            SegmentDefect::NegativeStart(self.start)
        } else if self.end < self.start {
            SegmentDefect::EndBeforeStart {
                start: self.start,
                end: self.end,
            }
        } else if self.text.trim().is_empty() {
            SegmentDefect::BlankText
        } else {
            return Ok(());
        };

        Err(FormatError::MalformedSegment { index, defect })
    }
}

/// Anything that can turn audio into a transcript: a remote inference
/// endpoint, a local engine, or a canned fixture in tests.
pub trait TranscriptSource {
    /// `return_timestamps` asks for per-segment timings; sources that cannot
    /// produce them leave `segments` as `None`.
    fn transcribe(
        &mut self,
        audio: &[u8],
        return_timestamps: bool,
    ) -> Result<TranscriptionResult, BoxError>;
}
