//! zensync CLI - keep a local replica of a ZenMoney account in sync
//!
//! Syncs on demand against the diff endpoint and caches the merged snapshot
//! on disk between runs.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::cache::{run_clear_cache, run_status};
use crate::commands::common::{resolve_config, GlobalOptions};
use crate::commands::sync::{run_refresh, run_sync};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("zensync=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&GlobalOptions::from(&cli))?;

    match cli.command {
        Commands::Sync { json } => run_sync(&config, json).await?,
        Commands::Refresh { json } => run_refresh(&config, json).await?,
        Commands::Status { json } => run_status(&config, json).await?,
        Commands::ClearCache => run_clear_cache(&config).await?,
    }

    Ok(())
}
