use transcript_subtitles::{to_srt, to_vtt, TranscriptSegment};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let segments = vec![
        TranscriptSegment::new(0.0, 2.5, "Hello, world!"),
        TranscriptSegment::new(3.0, 5.0, "This is a test."),
    ];

    println!("WebVTT format:");
    println!("{}", to_vtt(&segments)?);

    println!("SRT format:");
    println!("{}", to_srt(&segments)?);

    Ok(())
}
