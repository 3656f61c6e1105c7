use thiserror::Error;

/// Boxed error returned by transcription collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a single segment cannot be turned into a cue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentDefect {
    #[error("start time is missing")]
    MissingStart,
    #[error("end time is missing")]
    MissingEnd,
    #[error("text is missing")]
    MissingText,
    #[error("text is blank")]
    BlankText,
    #[error("timestamp has {0} bounds, expected start and end")]
    UnexpectedBounds(usize),
    #[error("start time {0} is negative")]
    NegativeStart(f64),
    #[error("timestamps must be finite, found start={start} end={end}")]
    NonFinite { start: f64, end: f64 },
    #[error("end time {end} is before start time {start}")]
    EndBeforeStart { start: f64, end: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// `index` is the zero-based position of the segment in the transcript.
    #[error("segment {index} is malformed: {defect}")]
    MalformedSegment { index: usize, defect: SegmentDefect },
    #[error("invalid timestamp {0}: expected a finite, non-negative number of seconds")]
    InvalidTimestamp(f64),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("transcription failed: {0}")]
    Transcription(#[source] BoxError),
    #[error("inference endpoint returned an error: {0}")]
    Inference(String),
    #[error("transcript has no timestamped segments, required for {0} output")]
    MissingSegments(&'static str),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to decode inference response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
