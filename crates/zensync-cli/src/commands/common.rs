use std::path::PathBuf;

use serde::Serialize;
use zensync_core::config::normalize_text_option;
use zensync_core::{EntityKind, Snapshot, SyncConfig};

use crate::cli::Cli;
use crate::error::CliError;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Serialize)]
pub struct EntityCountItem {
    pub entity: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SnapshotSummary {
    pub server_timestamp: i64,
    pub server_timestamp_iso: String,
    pub entities: Vec<EntityCountItem>,
}

/// Settings shared by every subcommand, taken from global flags.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub cache_path: Option<PathBuf>,
    pub force_fetch: Vec<EntityKind>,
    pub config: Option<PathBuf>,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            token: cli.token.clone(),
            api_url: cli.api_url.clone(),
            cache_path: cli.cache_path.clone(),
            force_fetch: cli.force_fetch.clone(),
            config: cli.config.clone(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zensync").join(CONFIG_FILE_NAME))
}

/// Config file, then environment, then flags; later layers win.
pub fn resolve_config(options: &GlobalOptions) -> Result<SyncConfig, CliError> {
    let file_config = match options.config.clone().or_else(default_config_path) {
        Some(path) => SyncConfig::load_from_path(&path)?,
        None => SyncConfig::default(),
    };
    let env_config = SyncConfig::from_env()?;
    let flag_config = SyncConfig {
        api_base_url: normalize_text_option(options.api_url.clone()),
        access_token: normalize_text_option(options.token.clone()),
        cache_path: options.cache_path.clone(),
        request_timeout_secs: None,
        force_fetch: Some(options.force_fetch.clone()).filter(|kinds| !kinds.is_empty()),
    };

    Ok(file_config.overlay(env_config).overlay(flag_config))
}

pub fn snapshot_summary(snapshot: &Snapshot) -> SnapshotSummary {
    SnapshotSummary {
        server_timestamp: snapshot.server_timestamp,
        server_timestamp_iso: format_server_timestamp(snapshot.server_timestamp),
        entities: snapshot
            .counts()
            .into_iter()
            .map(|(kind, count)| EntityCountItem {
                entity: kind.to_string(),
                count,
            })
            .collect(),
    }
}

pub fn format_summary_lines(summary: &SnapshotSummary) -> Vec<String> {
    let width = summary
        .entities
        .iter()
        .map(|item| item.entity.len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "Snapshot as of {} (serverTimestamp {})",
        summary.server_timestamp_iso, summary.server_timestamp
    )];
    lines.extend(
        summary
            .entities
            .iter()
            .map(|item| format!("  {:<width$}  {}", item.entity, item.count)),
    );
    lines
}

pub fn print_summary(snapshot: &Snapshot, as_json: bool) -> Result<(), CliError> {
    let summary = snapshot_summary(snapshot);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in format_summary_lines(&summary) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn format_server_timestamp(timestamp_secs: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp_secs, 0).map_or_else(
        || timestamp_secs.to_string(),
        |date_time| date_time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}
