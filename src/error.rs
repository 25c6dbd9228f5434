//! Error types for YouNotes.

use thiserror::Error;

/// Library-level error type for note-service operations.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("No transcript available for video {0}")]
    TranscriptNotFound(String),

    #[error("Transcript fetch failed: {0}")]
    TranscriptFetch(String),

    #[error("Note generation failed: {0}")]
    NoteGeneration(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for note-service operations.
pub type Result<T> = std::result::Result<T, NotesError>;
