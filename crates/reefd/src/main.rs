//! `reefd` — the Reef cluster-manager daemon.
//!
//! Binary entrypoint that wires the peer directory and the management
//! REST API into a running node.
//!
//! # Usage
//!
//! ```text
//! reefd start                       # start with defaults
//! reefd start -c reef.toml          # start with a config file
//! reefd start -l 127.0.0.1:24007    # override the listen address
//! ```

mod config;
mod telemetry;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reef_cluster::MemoryDirectory;
use reef_rest::{RestServer, RestServerConfig};
use tracing::{error, info};

use config::CliConfig;

// -----------------------------------------------------------------------
// CLI definition
// -----------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "reefd",
    version,
    about = "Reef distributed storage cluster manager daemon"
)]
struct Cli {
    /// Path to TOML config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the management daemon.
    Start {
        /// Override the REST listen address (e.g. "127.0.0.1:24007").
        #[arg(short = 'l', long)]
        listen_addr: Option<String>,
    },
}

// -----------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = CliConfig::load(cli.config.as_deref()).context("failed to load config")?;

    telemetry::init(&config.log.level);

    match cli.command {
        Commands::Start { listen_addr } => {
            // CLI args override config file values.
            if let Some(addr) = listen_addr {
                config.rest.listen_addr = addr;
            }
            start(config).await
        }
    }
}

/// Start the daemon: seed the directory and serve the management API
/// until a shutdown signal arrives.
async fn start(config: CliConfig) -> Result<()> {
    let directory = Arc::new(MemoryDirectory::new());
    for seed in config.peers {
        let peer = seed.into_peer().context("invalid [[peers]] entry")?;
        directory.insert(peer);
    }
    info!(peer_count = directory.len(), "peer directory seeded");

    let server = RestServer::new(RestServerConfig { directory });
    server
        .serve_with_shutdown(&config.rest.listen_addr, shutdown_signal())
        .await
        .context("management API server failed")?;

    info!("shutdown complete");
    Ok(())
}

/// Resolve when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(%e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
