//! Note generation from transcripts.
//!
//! Two interchangeable backends turn an assembled transcript into study
//! notes: a chat-completion provider (separate system and user roles) and a
//! single-prompt generative provider (instruction and transcript merged into
//! one text blob). The backend is selected once at startup via settings.

mod chat;
mod single_prompt;

pub use chat::ChatCompletionGenerator;
pub use single_prompt::SinglePromptGenerator;

use crate::config::{NotesProvider, Settings};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for note-generation services.
#[async_trait]
pub trait NoteGenerator: Send + Sync {
    /// Produce formatted study notes for an assembled transcript.
    ///
    /// Any collaborator failure (network, quota, malformed response shape)
    /// is a generation error. One attempt per call, no partial output.
    async fn generate(&self, transcript: &str) -> Result<String>;
}

/// Build the note generator selected by configuration.
pub fn create_generator(settings: &Settings) -> Arc<dyn NoteGenerator> {
    match settings.notes.provider {
        NotesProvider::Chat => Arc::new(ChatCompletionGenerator::new(
            &settings.notes,
            settings.prompts.clone(),
        )),
        NotesProvider::SinglePrompt => Arc::new(SinglePromptGenerator::new(
            &settings.notes,
            settings.prompts.clone(),
        )),
    }
}
