use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::format::OutputFormat;
use crate::TranscriptSource;

#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub file_name: String,
    pub format: OutputFormat,
    pub content: String,
}

impl Artifact {
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// All formats are served as `text/plain`.
    pub fn mime_type(&self) -> &'static str {
        "text/plain"
    }
}

/// Drives a [`TranscriptSource`] and packages the rendered transcript.
pub struct Exporter<S> {
    source: S,
    config: ExportConfig,
}

impl<S: TranscriptSource> Exporter<S> {
    pub fn new(source: S, config: ExportConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Transcribes `audio` and renders it in the configured default format.
    pub fn generate_default(
        &mut self,
        file_name: &str,
        audio: &[u8],
    ) -> Result<Artifact, ExportError> {
        self.generate(file_name, audio, self.config.default_format)
    }

    /// Timestamps are only requested from the source for subtitle formats.
    /// Failures are returned as-is; transcription is not retried.
    pub fn generate(
        &mut self,
        file_name: &str,
        audio: &[u8],
        format: OutputFormat,
    ) -> Result<Artifact, ExportError> {
        log::info!(
            "transcribing {file_name} ({} bytes) as {}",
            audio.len(),
            format.extension()
        );

        let result = self
            .source
            .transcribe(audio, format.requires_timestamps())
            .map_err(ExportError::Transcription)?;
        let content = format.render(&result)?;

        Ok(Artifact {
            file_name: self.artifact_name(file_name, format),
            format,
            content,
        })
    }

    pub fn artifact_name(&self, file_name: &str, format: OutputFormat) -> String {
        format!(
            "{file_name}{}.{}",
            self.config.file_suffix,
            format.extension()
        )
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
