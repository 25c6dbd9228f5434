//! YouNotes server entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use younotes::config::Settings;

/// HTTP service that turns YouTube video transcripts into study notes.
#[derive(Parser)]
#[command(name = "younotes", version, about)]
struct Cli {
    /// Address to bind.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Note-generation backend (chat, single_prompt).
    #[arg(long)]
    provider: Option<String>,

    /// Path to a configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("younotes={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration and fold in CLI/environment overrides
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(Some(path))?,
        None => Settings::load()?,
    };

    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(provider) = cli.provider {
        settings.notes.provider = provider.parse().map_err(anyhow::Error::msg)?;
    }
    if settings.notes.api_key.is_none() {
        settings.notes.api_key = std::env::var("GEMINI_API_KEY").ok();
    }

    younotes::server::serve(settings).await
}
