//! Decoding of Whisper-style inference endpoint responses.
//!
//! The endpoint answers with `{"text": ...}`, optionally carrying
//! `"chunks": [{"timestamp": [start, end], "text": ...}]` when timestamps were
//! requested, or with `{"error": ...}` on failure. Chunk bounds may be `null`
//! (the final chunk of a cut-off transcript commonly has no end), which is
//! reported as a malformed segment rather than guessed.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ExportError, FormatError, SegmentDefect};
use crate::{TranscriptSegment, TranscriptionResult};

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    chunks: Option<Vec<ChunkPayload>>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ChunkPayload {
    #[serde(default)]
    timestamp: Option<Vec<Option<f64>>>,
    #[serde(default)]
    text: Option<String>,
}

impl ChunkPayload {
    fn into_segment(self, index: usize) -> Result<TranscriptSegment, FormatError> {
        let malformed = |defect| FormatError::MalformedSegment { index, defect };

        let bounds = self.timestamp.unwrap_or_default();
        if bounds.len() > 2 {
            return Err(malformed(SegmentDefect::UnexpectedBounds(bounds.len())));
        }
        let start = bounds
            .first()
            .copied()
            .flatten()
            .ok_or_else(|| malformed(SegmentDefect::MissingStart))?;
        let end = bounds
            .get(1)
            .copied()
            .flatten()
            .ok_or_else(|| malformed(SegmentDefect::MissingEnd))?;
        let text = self
            .text
            .ok_or_else(|| malformed(SegmentDefect::MissingText))?;

        let segment = TranscriptSegment { start, end, text };
        segment.validate(index)?;
        Ok(segment)
    }
}

pub fn parse_response(bytes: &[u8]) -> Result<TranscriptionResult, ExportError> {
    let response: InferenceResponse = serde_json::from_slice(bytes)?;

    if let Some(error) = response.error {
        let message = match error {
            Value::String(message) => message,
            other => other.to_string(),
        };
        log::warn!("inference endpoint reported an error: {message}");
        return Err(ExportError::Inference(message));
    }

    if response.text.is_none() && response.chunks.is_none() {
        return Err(ExportError::Inference(format!(
            "response carries neither text nor chunks: {}",
            preview_payload(bytes)
        )));
    }

    let segments = response
        .chunks
        .map(|chunks| {
            chunks
                .into_iter()
                .enumerate()
                .map(|(index, chunk)| chunk.into_segment(index))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    if let Some(segments) = &segments {
        log::debug!("decoded {} timestamped chunks", segments.len());
    }

    Ok(TranscriptionResult {
        text: response.text.unwrap_or_default(),
        segments,
    })
}

fn preview_payload(bytes: &[u8]) -> String {
    const MAX_PREVIEW_BYTES: usize = 240;
    let len = bytes.len().min(MAX_PREVIEW_BYTES);
    let snippet = String::from_utf8_lossy(&bytes[..len]);
    if bytes.len() > MAX_PREVIEW_BYTES {
        format!("{snippet}...")
    } else {
        snippet.into_owned()
    }
}
