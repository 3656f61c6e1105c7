use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::subtitles::{to_srt, to_vtt};
use crate::{TranscriptSegment, TranscriptionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "txt")]
    PlainText,
    #[serde(rename = "srt")]
    SubRip,
    #[serde(rename = "vtt")]
    WebVtt,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::PlainText, Self::SubRip, Self::WebVtt];

    /// File-extension token used to label the downloaded artifact.
    pub fn extension(self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::SubRip => "srt",
            Self::WebVtt => "vtt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PlainText => "Plain Text (.txt)",
            Self::SubRip => "SubRip Subtitle (.srt)",
            Self::WebVtt => "WebVTT (.vtt)",
        }
    }

    pub fn requires_timestamps(self) -> bool {
        !matches!(self, Self::PlainText)
    }

    pub fn render(self, result: &TranscriptionResult) -> Result<String, ExportError> {
        let rendered = match self {
            Self::PlainText => plain_text(result),
            Self::SubRip => to_srt(self.timed_segments(result)?)?,
            Self::WebVtt => to_vtt(self.timed_segments(result)?)?,
        };
        Ok(rendered)
    }

    fn timed_segments(
        self,
        result: &TranscriptionResult,
    ) -> Result<&[TranscriptSegment], ExportError> {
        result
            .segments
            .as_deref()
            .ok_or(ExportError::MissingSegments(self.extension()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    /// Accepts an extension token (`srt`, `.vtt`) or a full label.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim();
        let token = key.trim_start_matches('.');

        Self::ALL
            .into_iter()
            .find(|format| {
                format.extension().eq_ignore_ascii_case(token)
                    || format.label().eq_ignore_ascii_case(key)
            })
            .ok_or_else(|| ExportError::UnknownFormat(value.to_string()))
    }
}

fn plain_text(result: &TranscriptionResult) -> String {
    if !result.text.trim().is_empty() {
        return result.text.clone();
    }

    result
        .segments
        .iter()
        .flatten()
        .map(|segment| segment.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
