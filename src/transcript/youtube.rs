use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::FetchedTranscript;

use super::{Transcript, TranscriptProvider, TranscriptSegment};
use crate::TranscriptError;

/// Caption provider backed by YouTube's public transcript endpoints
pub struct YoutubeTranscriptProvider {
    api: YouTubeTranscriptApi,
    preserve_formatting: bool,
}

impl YoutubeTranscriptProvider {
    /// Create a provider without cookies or proxy
    pub fn new(preserve_formatting: bool) -> Result<Self, TranscriptError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::ClientInit(e.to_string()))?;

        Ok(Self {
            api,
            preserve_formatting,
        })
    }
}

fn into_transcript(fetched: FetchedTranscript) -> Transcript {
    Transcript {
        video_id: fetched.video_id,
        language_code: fetched.language_code,
        segments: fetched
            .snippets
            .into_iter()
            .map(|snippet| TranscriptSegment::new(snippet.text, snippet.start, snippet.duration))
            .collect(),
    }
}

#[async_trait]
impl TranscriptProvider for YoutubeTranscriptProvider {
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Transcript, TranscriptError> {
        let languages: Vec<&str> = languages.iter().map(String::as_str).collect();

        tracing::debug!(
            "Requesting transcript for {} (preserve_formatting: {})",
            video_id,
            self.preserve_formatting
        );

        let fetched = self
            .api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| TranscriptError::FetchFailed {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(into_transcript(fetched))
    }

    fn provider_name(&self) -> &'static str {
        "YouTube"
    }
}
