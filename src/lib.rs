//! YouNotes - YouTube study notes service
//!
//! An HTTP service that accepts a YouTube video URL, fetches the video's
//! caption transcript, and asks a generative-text provider for concise,
//! well-structured study notes.
//!
//! # Overview
//!
//! Each request runs one linear pipeline:
//!
//! 1. Validate the request body and extract the 11-character video ID
//! 2. Fetch the ordered caption fragments for the video
//! 3. Join the fragment texts into a single transcript
//! 4. Submit the transcript to the configured note-generation backend
//! 5. Respond with the notes, or map the failure to 400/404/500
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Settings and prompt templates
//! - `video` - Video-ID extraction from YouTube URLs
//! - `transcript` - Transcript retrieval and assembly
//! - `notes` - Note generation (chat-completion and single-prompt backends)
//! - `server` - HTTP endpoint, CORS, error mapping
//!
//! # Example
//!
//! ```rust,no_run
//! use younotes::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     younotes::server::serve(settings).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod notes;
pub mod openai;
pub mod server;
pub mod transcript;
pub mod video;

pub use error::{NotesError, Result};
