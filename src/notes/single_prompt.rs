//! Single-prompt note generation.
//!
//! Talks to a Gemini-style `generateContent` endpoint: the style instruction
//! and the transcript travel as one text blob, and the generated notes come
//! back under `candidates[0].content.parts[0].text`.

use super::NoteGenerator;
use crate::config::{NotesPrompts, NotesSettings};
use crate::error::{NotesError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Note generator backed by a single-prompt generative API.
pub struct SinglePromptGenerator {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    prompts: NotesPrompts,
}

impl SinglePromptGenerator {
    /// Create a generator for the configured endpoint.
    ///
    /// A missing credential is tolerated here; the generator fails at call
    /// time instead, so the server can start without one.
    pub fn new(settings: &NotesSettings, prompts: NotesPrompts) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
            prompts,
        }
    }
}

#[async_trait]
impl NoteGenerator for SinglePromptGenerator {
    #[instrument(skip(self, transcript), fields(transcript_chars = transcript.len()))]
    async fn generate(&self, transcript: &str) -> Result<String> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            NotesError::NoteGeneration("GEMINI_API_KEY is not configured".to_string())
        })?;

        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), transcript.to_string());
        let user_prompt = NotesPrompts::render(&self.prompts.user, &vars);
        let prompt = format!("{}\n\n{}", self.prompts.system, user_prompt);

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", key)])
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            }))
            .send()
            .await
            .map_err(|e| NotesError::NoteGeneration(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(NotesError::NoteGeneration(format!(
                "Provider returned {}",
                response.status()
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| NotesError::NoteGeneration(format!("Malformed response: {}", e)))?;

        let notes = body
            .into_text()
            .ok_or_else(|| NotesError::NoteGeneration("Empty response from model".to_string()))?;

        debug!("Generated {} characters of notes", notes.len());
        Ok(notes)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate, if the response carried one.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candidate_text() {
        let body = r###"{"candidates":[{"content":{"parts":[{"text":"## Key Concepts"}]}}]}"###;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_text(), Some("## Key Concepts".to_string()));
    }

    #[test]
    fn test_parse_empty_candidates() {
        let body = r#"{"candidates":[]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_text(), None);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_at_call_time() {
        let settings = NotesSettings {
            api_key: None,
            ..Default::default()
        };
        let generator = SinglePromptGenerator::new(&settings, NotesPrompts::default());

        let err = generator.generate("some transcript").await.unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
