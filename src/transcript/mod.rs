//! Transcript retrieval and assembly.
//!
//! Provides a trait-based interface for transcript sources and the assembler
//! that joins timed caption fragments into a single string.

mod youtube;

pub use youtube::YoutubeTranscriptSource;

use crate::error::Result;
use crate::video::VideoId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One timed caption entry from a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptFragment {
    /// Caption text.
    pub text: String,
    /// Offset from the start of the video, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// Caption duration, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl TranscriptFragment {
    /// Create a fragment carrying only text.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: None,
            duration: None,
        }
    }
}

/// Trait for transcript retrieval services.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the caption fragments for a video, in chronological order.
    ///
    /// A video without captions may yield an empty sequence; collaborator
    /// failures surface as `TranscriptFetch` errors. One attempt per call,
    /// no retries.
    async fn fetch(&self, video_id: &VideoId) -> Result<Vec<TranscriptFragment>>;
}

/// Join fragment texts into a single transcript string.
///
/// Fragments are space-joined in input order; an empty sequence yields an
/// empty string.
pub fn assemble(fragments: &[TranscriptFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
