use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::extractors::extract_video_id;
use crate::utils::format_duration;
use crate::TranscriptError;

pub mod youtube;

pub use youtube::YoutubeTranscriptProvider;

/// Caption languages requested from the provider, in order of preference
pub const DEFAULT_LANGUAGES: &[&str] = &["en"];

/// Transcript returned by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Video the captions belong to
    pub video_id: String,

    /// Language code of the caption track that was used
    pub language_code: String,

    /// Caption units in chronological order
    pub segments: Vec<TranscriptSegment>,
}

/// Individual transcript segment with timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Segment text
    pub text: String,

    /// Start time in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    /// End time in seconds
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

impl Transcript {
    /// Segment texts joined with single spaces
    pub fn text(&self) -> String {
        join_segments(&self.segments)
    }

    /// Seconds covered by the captions
    pub fn duration(&self) -> f64 {
        self.segments.last().map(TranscriptSegment::end).unwrap_or(0.0)
    }
}

/// Join segment texts with a single space, in order.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Source of timed captions for a video
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the transcript of `video_id` in the first available language of `languages`
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Transcript, TranscriptError>;

    /// Get the name of this provider
    fn provider_name(&self) -> &'static str;
}

/// Turns raw user input into a transcript
pub struct TranscriptPipeline {
    provider: Box<dyn TranscriptProvider>,
    languages: Vec<String>,
}

impl TranscriptPipeline {
    /// Create a pipeline requesting the default languages
    pub fn new(provider: Box<dyn TranscriptProvider>) -> Self {
        Self {
            provider,
            languages: DEFAULT_LANGUAGES.iter().map(|lang| lang.to_string()).collect(),
        }
    }

    /// Resolve the video ID from a URL or bare ID and fetch its transcript
    pub async fn fetch(&self, url_or_id: &str) -> Result<Transcript, TranscriptError> {
        let video_id = extract_video_id(url_or_id);
        tracing::info!("Resolved video ID: {}", video_id);

        tracing::debug!(
            "Fetching transcript via {} (languages: {:?})",
            self.provider.provider_name(),
            self.languages
        );
        let transcript = self.provider.fetch(&video_id, &self.languages).await?;

        tracing::info!(
            "Fetched {} segments in language {} ({})",
            transcript.segments.len(),
            transcript.language_code,
            format_duration(transcript.duration())
        );
        Ok(transcript)
    }
}
