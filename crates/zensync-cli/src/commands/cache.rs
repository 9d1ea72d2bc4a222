use std::path::Path;

use zensync_core::{FileSnapshotStore, Snapshot, SnapshotPersistence, SyncConfig};

use crate::commands::common::print_summary;
use crate::error::CliError;

pub async fn load_cached_snapshot(cache_path: &Path) -> Result<Option<Snapshot>, CliError> {
    FileSnapshotStore::new(cache_path)
        .load_snapshot()
        .await
        .map_err(|error| CliError::UnreadableCache {
            path: cache_path.display().to_string(),
            reason: error.to_string(),
        })
}

pub async fn run_status(config: &SyncConfig, as_json: bool) -> Result<(), CliError> {
    let cache_path = config.resolved_cache_path()?;
    match load_cached_snapshot(&cache_path).await? {
        Some(snapshot) => print_summary(&snapshot, as_json),
        None if as_json => {
            println!("null");
            Ok(())
        }
        None => {
            println!("No cached snapshot at {}", cache_path.display());
            Ok(())
        }
    }
}

pub async fn run_clear_cache(config: &SyncConfig) -> Result<(), CliError> {
    let cache_path = config.resolved_cache_path()?;
    FileSnapshotStore::new(&cache_path)
        .clear_snapshot()
        .await
        .map_err(|error| CliError::ClearCache {
            path: cache_path.display().to_string(),
            reason: error.to_string(),
        })?;
    println!("Removed cached snapshot at {}", cache_path.display());
    Ok(())
}
