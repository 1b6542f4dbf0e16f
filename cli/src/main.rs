//! CLI entrypoint for Campus Chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use campus_application::config::BehaviorConfig;
use campus_infrastructure::{ConfigLoader, FileConfig, HttpChatBackend};
use campus_presentation::{Cli, ConsoleChat, TuiApp, TuiOptions};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // The TUI owns the terminal, so interactive runs log to a file instead
    // of the screen.
    let interactive = cli.message.is_none() && !cli.status;

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let _log_guard = init_logging(filter, interactive);

    info!("Starting Campus Chat");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    for warning in config.validate() {
        warn!("config: {}", warning);
    }

    // CLI flag overrides the configured backend URL
    let base_url = cli
        .backend
        .as_deref()
        .unwrap_or_else(|| config.backend.base_url());

    let behavior = behavior_from(&config);

    // === Dependency Injection ===
    // One HTTP adapter serves as both the chat backend and the health probe
    let http = Arc::new(HttpChatBackend::new(base_url));

    // Status mode: probe once, print, exit
    if cli.status {
        let mut console = ConsoleChat::new(http.clone(), http, behavior);
        console.status().await;
        return Ok(());
    }

    // One-shot mode: ask a single question and print the reply
    if let Some(message) = &cli.message {
        let mut console =
            ConsoleChat::new(http.clone(), http, behavior).with_spinner(!cli.quiet);

        if !cli.quiet {
            console.status().await;
        }
        console.send(message).await;
        return Ok(());
    }

    // Interactive mode: full-screen TUI
    let options = TuiOptions {
        notice_ttl: config.ui.notice_duration(),
        show_timestamps: config.ui.show_timestamps,
        health_interval: config.health.interval(),
    };

    let mut app = TuiApp::new(http.clone(), http, behavior, options);
    app.run().await?;

    Ok(())
}

/// Build the controller behavior from the loaded file config.
fn behavior_from(config: &FileConfig) -> BehaviorConfig {
    let mut behavior = BehaviorConfig::default().with_canned_delay_ms(config.chat.canned_delay_ms);

    if let Some(welcome) = config.chat.welcome() {
        behavior = behavior.with_welcome_text(welcome);
    }

    behavior
}

/// Set up the tracing subscriber.
///
/// Interactive runs write to a daily-rotated file under the platform data
/// directory; the returned guard keeps the background writer alive until
/// exit. Everything else logs straight to the terminal.
fn init_logging(filter: EnvFilter, interactive: bool) -> Option<WorkerGuard> {
    if interactive && let Some(dir) = log_dir() {
        let appender = tracing_appender::rolling::daily(&dir, "campus-chat.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .init();

        return Some(guard);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    None
}

/// Log directory for interactive runs, created on demand.
fn log_dir() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("campus-chat").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
