//! Configuration settings for YouNotes.

use super::prompts::NotesPrompts;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
///
/// Built once at startup (file, then CLI/environment overrides folded in by
/// `main`) and passed immutably into the server state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcript: TranscriptSettings,
    pub notes: NotesSettings,
    pub prompts: NotesPrompts,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Allowed CORS origin for the frontend ("*" allows any origin).
    pub cors_origin: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origin: "*".to_string(),
        }
    }
}

/// Transcript retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Preferred caption languages, in priority order.
    pub languages: Vec<String>,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
        }
    }
}

/// Note-generation provider type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NotesProvider {
    /// Chat-completion API with separate system and user roles (default).
    #[default]
    Chat,
    /// Single-prompt generative API (instruction and transcript in one blob).
    SinglePrompt,
}

impl std::str::FromStr for NotesProvider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" | "openai" => Ok(NotesProvider::Chat),
            "single_prompt" | "gemini" => Ok(NotesProvider::SinglePrompt),
            _ => Err(format!("Unknown notes provider: {}", s)),
        }
    }
}

impl std::fmt::Display for NotesProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotesProvider::Chat => write!(f, "chat"),
            NotesProvider::SinglePrompt => write!(f, "single_prompt"),
        }
    }
}

/// Note-generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesSettings {
    /// Note-generation provider (chat, single_prompt).
    pub provider: NotesProvider,
    /// Model for the chat-completion provider.
    pub model: String,
    /// Endpoint for the single-prompt provider.
    pub api_url: String,
    /// Credential for the single-prompt provider. When unset, `main` falls
    /// back to the GEMINI_API_KEY environment variable; a still-missing key
    /// fails at call time, not at startup.
    pub api_key: Option<String>,
}

impl Default for NotesSettings {
    fn default() -> Self {
        Self {
            provider: NotesProvider::Chat,
            model: "gpt-4o-mini".to_string(),
            api_url:
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
                    .to_string(),
            api_key: None,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or the default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("younotes")
            .join("config.toml")
    }
}
