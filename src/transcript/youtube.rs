//! YouTube transcript source implementation.

use super::{TranscriptFragment, TranscriptSource};
use crate::config::TranscriptSettings;
use crate::error::{NotesError, Result};
use crate::video::VideoId;
use async_trait::async_trait;
use tracing::{debug, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Transcript source backed by YouTube's publicly available caption tracks.
pub struct YoutubeTranscriptSource {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YoutubeTranscriptSource {
    /// Create a source with the preferred caption languages from settings.
    pub fn new(settings: &TranscriptSettings) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            NotesError::TranscriptFetch(format!("Failed to create transcript client: {}", e))
        })?;

        Ok(Self {
            api,
            languages: settings.languages.clone(),
        })
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    #[instrument(skip(self), fields(video_id = %video_id))]
    async fn fetch(&self, video_id: &VideoId) -> Result<Vec<TranscriptFragment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id.as_str(), &languages, false)
            .await
            .map_err(|e| NotesError::TranscriptFetch(e.to_string()))?;

        debug!("Fetched {} caption fragments", transcript.snippets.len());

        Ok(transcript
            .snippets
            .into_iter()
            .map(|s| TranscriptFragment {
                text: s.text,
                start: Some(s.start),
                duration: Some(s.duration),
            })
            .collect())
    }
}
