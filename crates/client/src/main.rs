//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;
mod state;
mod view_model;

use anyhow::Result;
use runtime::{FileMatchStore, MatchSession};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::App;
use config::ClientConfig;
use presentation::{EventLoop, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();

    setup_logging()?;

    let mut app = App::new(build_session(&config)?);
    app.restore();

    let mut terminal = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let result = EventLoop::new(app, config.restore_delay)
        .run(&mut terminal)
        .await;

    terminal::restore()?;
    result
}

fn build_session(config: &ClientConfig) -> Result<MatchSession> {
    if config.ephemeral {
        tracing::info!("Running without persistence");
        return Ok(MatchSession::ephemeral());
    }

    let store = match &config.data_dir {
        Some(dir) => FileMatchStore::new(dir)?,
        None => FileMatchStore::in_user_data_dir()?,
    };
    tracing::info!("Match state stored at {}", store.path().display());

    Ok(MatchSession::new(Box::new(store)))
}

/// Logging goes to a file only; stderr would draw over the TUI.
fn setup_logging() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the background writer alive for the life of the process.
    std::mem::forget(guard);

    tracing::info!("Log file: {}/client.log", log_dir.display());

    Ok(())
}

fn log_directory() -> std::path::PathBuf {
    directories::ProjectDirs::from("", "", "stagestrike")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("/tmp/stagestrike/logs"))
}
