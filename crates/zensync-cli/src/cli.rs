use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zensync_core::EntityKind;

#[derive(Parser)]
#[command(name = "zensync")]
#[command(about = "Keep a local replica of your ZenMoney account in sync")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// ZenMoney API access token (overrides ZENMONEY_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// ZenMoney API base URL (overrides ZENMONEY_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path of the snapshot cache file (overrides ZENSYNC_CACHE_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_path: Option<PathBuf>,

    /// Entity types to refetch in full, comma-separated (overrides ZENSYNC_FORCE_FETCH)
    #[arg(long, global = true, value_delimiter = ',', value_name = "TYPES")]
    pub force_fetch: Vec<EntityKind>,

    /// Optional JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bring the local snapshot up to date
    Sync {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Discard the local snapshot and download everything again
    Refresh {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the cached snapshot without contacting the server
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove the cached snapshot
    ClearCache,
}
