use anyhow::Context;
use atrium_dashboard::{AppState, DashboardServer};
use atrium_session::{SessionStore, create_storage};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Atrium: a mock-auth account dashboard demo.
#[derive(Debug, Parser)]
#[command(name = "atrium-server", version, about)]
struct Args {
    /// Path to the configuration file (TOML).
    #[arg(long, env = "ATRIUM_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => atrium_core::config::load_config_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => atrium_core::config::load_config()?,
    };
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    tracing::info!(backend = ?config.session.backend, "session storage configured");

    let storage = create_storage(&config.session)?;
    let store = Arc::new(SessionStore::new(storage));
    let state = AppState::new(config, store);

    DashboardServer::new(state).run().await?;

    Ok(())
}
