use transcript_subtitles::inference::parse_response;
use transcript_subtitles::{
    BoxError, ExportConfig, ExportError, Exporter, OutputFormat, TranscriptSource,
    TranscriptionResult,
};

const TIMESTAMPED_RESPONSE: &[u8] = br#"{
    "text": " Hello, world! This is a test.",
    "chunks": [
        {"timestamp": [0.0, 2.5], "text": " Hello, world!"},
        {"timestamp": [3.0, 5.0], "text": " This is a test."}
    ]
}"#;

/// Replays canned endpoint responses and records what it was asked for.
#[derive(Default)]
struct CannedSource {
    timestamp_requests: Vec<bool>,
    fail_with: Option<&'static str>,
}

impl TranscriptSource for CannedSource {
    fn transcribe(
        &mut self,
        audio: &[u8],
        return_timestamps: bool,
    ) -> Result<TranscriptionResult, BoxError> {
        assert!(!audio.is_empty(), "audio should be forwarded");
        self.timestamp_requests.push(return_timestamps);

        if let Some(message) = self.fail_with {
            return Err(message.into());
        }

        let body: &[u8] = if return_timestamps {
            TIMESTAMPED_RESPONSE
        } else {
            br#"{"text": " Hello, world! This is a test."}"#
        };
        Ok(parse_response(body)?)
    }
}

#[test]
fn srt_artifact_is_named_after_the_upload() {
    let mut exporter = Exporter::new(CannedSource::default(), ExportConfig::default());
    let artifact = exporter
        .generate("talk.mp3", b"ID3", OutputFormat::SubRip)
        .expect("srt export should succeed");

    assert_eq!(artifact.file_name, "talk.mp3_transcript.srt");
    assert_eq!(artifact.extension(), "srt");
    assert_eq!(artifact.mime_type(), "text/plain");
    assert_eq!(
        artifact.content,
        "1\n00:00:00,000 --> 00:00:02,500\nHello, world!\n\n2\n00:00:03,000 --> 00:00:05,000\nThis is a test.\n\n"
    );
}

#[test]
fn timestamps_are_only_requested_for_subtitles() {
    let mut exporter = Exporter::new(CannedSource::default(), ExportConfig::default());
    for format in OutputFormat::ALL {
        exporter
            .generate("clip.wav", b"RIFF", format)
            .expect("export should succeed");
    }

    assert_eq!(
        exporter.into_source().timestamp_requests,
        vec![false, true, true]
    );
}

#[test]
fn plain_text_is_passed_through() {
    let mut exporter = Exporter::new(CannedSource::default(), ExportConfig::default());
    let artifact = exporter
        .generate("clip.wav", b"RIFF", OutputFormat::PlainText)
        .expect("text export should succeed");

    assert_eq!(artifact.file_name, "clip.wav_transcript.txt");
    assert_eq!(artifact.content, " Hello, world! This is a test.");
}

#[test]
fn default_format_and_suffix_come_from_config() {
    let config = ExportConfig::from_toml_str("default_format = \"vtt\"\nfile_suffix = \"_subs\"")
        .expect("config should parse");
    let mut exporter = Exporter::new(CannedSource::default(), config);
    let artifact = exporter
        .generate_default("episode.m4a", b"ftyp")
        .expect("default export should succeed");

    assert_eq!(artifact.file_name, "episode.m4a_subs.vtt");
    assert!(artifact.content.starts_with("WEBVTT\n\n00:00:00.000 --> 00:00:02.500\n"));
}

#[test]
fn source_failures_surface_without_retry() {
    let source = CannedSource {
        fail_with: Some("connection reset"),
        ..CannedSource::default()
    };
    let mut exporter = Exporter::new(source, ExportConfig::default());
    let error = exporter
        .generate("clip.wav", b"RIFF", OutputFormat::WebVtt)
        .expect_err("source failure must surface");

    assert!(matches!(error, ExportError::Transcription(_)));
    assert!(error.to_string().contains("connection reset"));
    assert_eq!(exporter.into_source().timestamp_requests.len(), 1);
}
