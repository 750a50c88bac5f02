use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use roster_server::{ServerConfig, build_app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// In-memory developer roster with net-of-tax salaries.
///
/// Serves list/get/create/update/delete over HTTP. Records live only for the
/// life of the process.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding the config file.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Route prefix for the developer endpoints, overriding the config file.
    /// Use "/" to serve them at the root.
    #[arg(long)]
    context_path: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(context_path) = &self.context_path {
            config.context_path = context_path.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown requested");
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_file.as_deref())?;

    let config = cli.resolve_config()?;
    debug!(?config, "resolved configuration");

    let app = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %listener.local_addr()?, context_path = %config.context_path, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
