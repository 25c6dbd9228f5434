//! HTTP surface for the notes service.
//!
//! A single-route pipeline per request: validate the body, extract the video
//! ID, fetch and assemble the transcript, generate notes, respond. Failures
//! map to the 400/404/500 responses the frontend contract expects.

use crate::config::{ServerSettings, Settings};
use crate::error::{NotesError, Result};
use crate::notes::{self, NoteGenerator};
use crate::transcript::{self, TranscriptSource, YoutubeTranscriptSource};
use crate::video::VideoIdExtractor;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

/// Shared application state.
///
/// Immutable for the lifetime of the server; requests share nothing else.
pub struct AppState {
    pub extractor: VideoIdExtractor,
    pub transcripts: Arc<dyn TranscriptSource>,
    pub generator: Arc<dyn NoteGenerator>,
}

// === Request/Response Types ===

#[derive(Debug, Default, Deserialize)]
struct NotesRequest {
    /// YouTube video URL.
    #[serde(default)]
    url: String,
}

#[derive(Serialize)]
struct NotesResponse {
    notes: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Run the HTTP server until shutdown.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let transcripts: Arc<dyn TranscriptSource> =
        Arc::new(YoutubeTranscriptSource::new(&settings.transcript)?);
    let generator = notes::create_generator(&settings);

    let state = Arc::new(AppState {
        extractor: VideoIdExtractor::new(),
        transcripts,
        generator,
    });

    let app = app(state, &settings.server)?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Note generation provider: {}", settings.notes.provider);
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with CORS configured from settings.
pub fn app(state: Arc<AppState>, settings: &ServerSettings) -> Result<Router> {
    Ok(Router::new()
        .route("/", post(create_notes))
        .route("/health", get(health))
        .layer(cors_layer(&settings.cors_origin)?)
        .with_state(state))
}

fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origin == "*" {
        Ok(cors.allow_origin(Any))
    } else {
        let origin = origin.parse::<HeaderValue>().map_err(|e| {
            NotesError::Config(format!("Invalid CORS origin '{}': {}", origin, e))
        })?;
        Ok(cors.allow_origin(origin))
    }
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn create_notes(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    // An absent or non-JSON body falls back to an empty request; the URL
    // check below owns the rejection.
    let req = serde_json::from_slice::<NotesRequest>(&body).unwrap_or_default();

    if req.url.trim().is_empty() {
        warn!("Request without a URL");
        return error_response(StatusCode::BAD_REQUEST, "No URL provided", None);
    }

    match process(&state, &req.url).await {
        Ok(notes) => Json(NotesResponse { notes }).into_response(),
        Err(e @ NotesError::InvalidUrl(_)) => {
            warn!("{}", e);
            error_response(StatusCode::BAD_REQUEST, "Invalid YouTube URL", None)
        }
        Err(e @ NotesError::TranscriptNotFound(_)) => {
            warn!("{}", e);
            error_response(
                StatusCode::NOT_FOUND,
                "No transcript found for this video",
                None,
            )
        }
        Err(e) => {
            error!("Failed to process video: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process video",
                Some(e.to_string()),
            )
        }
    }
}

/// The linear request pipeline: extract, fetch, assemble, generate.
async fn process(state: &AppState, url: &str) -> Result<String> {
    let video_id = state
        .extractor
        .extract(url)
        .ok_or_else(|| NotesError::InvalidUrl(url.to_string()))?;

    let fragments = state.transcripts.fetch(&video_id).await?;
    if fragments.is_empty() {
        return Err(NotesError::TranscriptNotFound(video_id.to_string()));
    }

    let full_transcript = transcript::assemble(&fragments);
    state.generator.generate(&full_transcript).await
}

fn error_response(status: StatusCode, message: &str, details: Option<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            details,
        }),
    )
        .into_response()
}
