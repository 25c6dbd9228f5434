//! Chat-completion note generation.

use super::NoteGenerator;
use crate::config::{NotesPrompts, NotesSettings};
use crate::error::{NotesError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Sampling temperature for note generation.
const TEMPERATURE: f32 = 0.7;

/// Output cap for generated notes, in tokens.
const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Note generator backed by a chat-completion API.
pub struct ChatCompletionGenerator {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    prompts: NotesPrompts,
}

impl ChatCompletionGenerator {
    /// Create a generator using the configured model and prompts.
    pub fn new(settings: &NotesSettings, prompts: NotesPrompts) -> Self {
        Self {
            client: create_client(),
            model: settings.model.clone(),
            prompts,
        }
    }
}

#[async_trait]
impl NoteGenerator for ChatCompletionGenerator {
    #[instrument(skip(self, transcript), fields(transcript_chars = transcript.len()))]
    async fn generate(&self, transcript: &str) -> Result<String> {
        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), transcript.to_string());
        let user_prompt = NotesPrompts::render(&self.prompts.user, &vars);

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.prompts.system.clone())
                .build()
                .map_err(|e| NotesError::NoteGeneration(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_prompt)
                .build()
                .map_err(|e| NotesError::NoteGeneration(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(TEMPERATURE)
            .max_completion_tokens(MAX_OUTPUT_TOKENS)
            .build()
            .map_err(|e| NotesError::NoteGeneration(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| NotesError::OpenAI(format!("Chat completion failed: {}", e)))?;

        let notes = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| NotesError::NoteGeneration("Empty response from model".to_string()))?
            .clone();

        debug!("Generated {} characters of notes", notes.len());
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_creation() {
        let settings = NotesSettings::default();
        let generator = ChatCompletionGenerator::new(&settings, NotesPrompts::default());
        assert_eq!(generator.model, settings.model);
    }
}
