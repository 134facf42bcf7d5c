use anyhow::{Context, Result};

use crate::transcript::{Transcript, TranscriptSegment};
use crate::utils::{format_srt_timestamp, format_vtt_timestamp};

/// Plain text: every segment text joined by a single space
pub fn format_as_text(transcript: &Transcript) -> String {
    transcript.text()
}

pub fn format_as_json(transcript: &Transcript) -> Result<String> {
    serde_json::to_string_pretty(transcript).context("Failed to serialize transcript to JSON")
}

pub fn format_as_srt(transcript: &Transcript) -> String {
    transcript
        .segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                index + 1,
                format_srt_timestamp(segment.start),
                format_srt_timestamp(segment.end()),
                segment.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_as_vtt(transcript: &Transcript) -> String {
    let mut content = String::from("WEBVTT\n");
    for segment in &transcript.segments {
        content.push('\n');
        content.push_str(&vtt_cue(segment));
    }
    content
}

fn vtt_cue(segment: &TranscriptSegment) -> String {
    format!(
        "{} --> {}\n{}\n",
        format_vtt_timestamp(segment.start),
        format_vtt_timestamp(segment.end()),
        segment.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transcript {
        Transcript {
            video_id: "abc123".to_string(),
            language_code: "en".to_string(),
            segments: vec![
                TranscriptSegment::new("Hello", 0.0, 1.5),
                TranscriptSegment::new("world", 1.5, 2.25),
            ],
        }
    }

    #[test]
    fn test_format_as_text() {
        assert_eq!(format_as_text(&sample()), "Hello world");
    }

    #[test]
    fn test_format_as_json() {
        let json = format_as_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["video_id"], "abc123");
        assert_eq!(value["language_code"], "en");
        assert_eq!(value["segments"][1]["text"], "world");
        assert_eq!(value["segments"][1]["start"], 1.5);
        assert_eq!(value["segments"][1]["duration"], 2.25);
    }

    #[test]
    fn test_format_as_srt() {
        let expected = "1\n00:00:00,000 --> 00:00:01,500\nHello\n\n2\n00:00:01,500 --> 00:00:03,750\nworld\n";
        assert_eq!(format_as_srt(&sample()), expected);
    }

    #[test]
    fn test_format_as_vtt() {
        let expected = "WEBVTT\n\n00:00:00.000 --> 00:00:01.500\nHello\n\n00:00:01.500 --> 00:00:03.750\nworld\n";
        assert_eq!(format_as_vtt(&sample()), expected);
    }

    #[test]
    fn test_empty_transcript() {
        let empty = Transcript {
            segments: Vec::new(),
            ..sample()
        };
        assert_eq!(format_as_text(&empty), "");
        assert_eq!(format_as_srt(&empty), "");
        assert_eq!(format_as_vtt(&empty), "WEBVTT\n");
    }
}
