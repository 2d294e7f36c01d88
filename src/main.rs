//! Tennis Tracker - point-by-point match tracking from the console
//!
//! This is the main entry point. It handles:
//! - Loading match settings from the environment
//! - Logging to stderr, so it never mixes with the scoreboard
//! - Running the command session on stdin/stdout

mod app;
mod config;
mod export;
mod scoring;
mod util;

use std::io;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::Session;
use crate::config::{Config, LogFormat};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level, config.log_format);

    info!("Starting Tennis Tracker");
    info!(
        player1 = %config.player_names[0],
        player2 = %config.player_names[1],
        format = config.format.description(),
        export_dir = %config.export_dir.display(),
        "Match settings loaded"
    );

    let stdin = io::stdin();
    let mut session = Session::new(&config, io::stdout());
    session.run(stdin.lock())?;

    info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(log_level: &str, format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}
