use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ghsearch::github::GithubClient;
use ghsearch::storage::{FileStore, HistoryStore, KeyValueStore, MemoryStore};
use ghsearch::{app, util};

#[derive(Parser, Debug)]
#[command(name = "ghsearch", version, about = "Search GitHub users from the terminal")]
struct Cli {
    /// Username to search for on startup
    query: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep search history in memory only
    #[arg(long)]
    no_history: bool,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = util::config::AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!(api_url = %config.github.api_url, "ghsearch starting");

    let client = GithubClient::new(&config.github.api_url)?;

    let storage: Box<dyn KeyValueStore + Send> = if cli.no_history {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(config.history_dir()))
    };
    let history = HistoryStore::new(storage);

    // Run the TUI event loop
    app::event_loop::run(config, client, history, cli.query).await
}

fn setup_logging(
    config: &util::config::AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ghsearch.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("ghsearch=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
