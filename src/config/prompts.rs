//! Prompt templates for note generation.
//!
//! Templates use `{{variable}}` placeholders and can be overridden in the
//! configuration file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Prompt pair used to turn a transcript into study notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesPrompts {
    /// Style guidance sent as the system instruction.
    pub system: String,
    /// User template; `{{transcript}}` is replaced with the assembled text.
    pub user: String,
}

impl Default for NotesPrompts {
    fn default() -> Self {
        Self {
            system: "You are a helpful assistant that creates concise, well-structured notes \
                     from video transcripts. Format the notes with proper headings, bullet \
                     points, and highlight key concepts."
                .to_string(),
            user: "Please create comprehensive notes from this video transcript: {{transcript}}"
                .to_string(),
        }
    }
}

impl NotesPrompts {
    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = NotesPrompts::default();
        assert!(!prompts.system.is_empty());
        assert!(prompts.user.contains("{{transcript}}"));
    }

    #[test]
    fn test_render_template() {
        let template = "Please create comprehensive notes from this video transcript: {{transcript}}";
        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), "Hello world".to_string());

        let result = NotesPrompts::render(template, &vars);
        assert_eq!(
            result,
            "Please create comprehensive notes from this video transcript: Hello world"
        );
    }
}
