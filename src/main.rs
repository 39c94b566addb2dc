//! Strictly Hanoi - terminal Tower of Hanoi
//!
//! Reads moves from stdin, draws the towers on stdout. Diagnostics go to
//! stderr, filtered by `RUST_LOG`.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use strictly_hanoi::{GameSession, HanoiConfig};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    run(cli)
}

/// Play one game on the process's terminal.
#[instrument(skip_all, fields(config_path = %cli.config.display()))]
fn run(cli: Cli) -> Result<()> {
    let config = HanoiConfig::resolve(cli.disks, Some(cli.config.as_path()))?;
    info!(disks = config.disks().get(), "Configuration resolved");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let outcome = GameSession::new(config, stdin, stdout).run()?;

    info!(%outcome, "Exiting");
    Ok(())
}

/// Stderr tracing so the game's stdout stays clean. Defaults to `warn`.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
