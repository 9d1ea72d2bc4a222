use std::path::PathBuf;

use clap::Parser;
use pretty_assertions::assert_eq;
use zensync_core::{EntityKind, Snapshot, SnapshotPersistence, SyncConfig};

use crate::cli::{Cli, Commands};
use crate::commands::cache::{load_cached_snapshot, run_clear_cache};
use crate::commands::common::{
    format_server_timestamp, format_summary_lines, resolve_config, snapshot_summary, GlobalOptions,
};
use crate::error::CliError;

fn snapshot_with_merchants() -> Snapshot {
    let merchants = serde_json::from_str(
        r#"[{"id": "m1", "changed": 1, "user": 1, "title": "Cafe"},
            {"id": "m2", "changed": 1, "user": 1, "title": "Bakery"}]"#,
    )
    .unwrap();
    Snapshot {
        server_timestamp: 0,
        merchant: Some(merchants),
        ..Default::default()
    }
}

#[test]
fn format_server_timestamp_returns_utc_label() {
    assert_eq!(format_server_timestamp(0), "1970-01-01 00:00:00 UTC");
}

#[test]
fn snapshot_summary_lists_every_entity_type() {
    let summary = snapshot_summary(&snapshot_with_merchants());
    assert_eq!(summary.entities.len(), EntityKind::ALL.len());

    let merchant = summary
        .entities
        .iter()
        .find(|item| item.entity == "merchant")
        .unwrap();
    assert_eq!(merchant.count, 2);
    assert!(summary
        .entities
        .iter()
        .any(|item| item.entity == "reminderMarker" && item.count == 0));
}

#[test]
fn format_summary_lines_include_watermark_and_counts() {
    let lines = format_summary_lines(&snapshot_summary(&snapshot_with_merchants()));
    assert_eq!(lines.len(), EntityKind::ALL.len() + 1);
    assert!(lines[0].contains("1970-01-01 00:00:00 UTC"));
    assert!(lines[0].contains("serverTimestamp 0"));
    assert!(lines
        .iter()
        .any(|line| line.trim_start().starts_with("merchant") && line.ends_with(" 2")));
}

#[test]
fn cli_parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "zensync",
        "sync",
        "--json",
        "--token",
        "abc",
        "--cache-path",
        "/tmp/snapshot.json",
    ])
    .unwrap();

    assert!(matches!(cli.command, Commands::Sync { json: true }));
    let options = GlobalOptions::from(&cli);
    assert_eq!(options.token.as_deref(), Some("abc"));
    assert_eq!(options.cache_path, Some(PathBuf::from("/tmp/snapshot.json")));
}

#[test]
fn cli_parses_force_fetch_list() {
    let cli = Cli::try_parse_from([
        "zensync",
        "refresh",
        "--force-fetch",
        "tag,reminderMarker",
    ])
    .unwrap();

    let options = GlobalOptions::from(&cli);
    assert_eq!(
        options.force_fetch,
        vec![EntityKind::Tag, EntityKind::ReminderMarker]
    );
    assert!(Cli::try_parse_from(["zensync", "sync", "--force-fetch", "goal"]).is_err());
}

#[test]
fn resolve_config_prefers_flags_over_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{"access_token": "file-token", "cache_path": "/from/file.json", "request_timeout_secs": 15, "force_fetch": ["user"]}"#,
    )
    .unwrap();

    let config = resolve_config(&GlobalOptions {
        token: Some(" flag-token ".to_string()),
        cache_path: Some(PathBuf::from("/from/flag.json")),
        force_fetch: vec![EntityKind::Merchant],
        config: Some(config_path),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(config.access_token.as_deref(), Some("flag-token"));
    assert_eq!(config.cache_path, Some(PathBuf::from("/from/flag.json")));
    assert_eq!(config.request_timeout_secs, Some(15));
    assert_eq!(config.force_fetch, Some(vec![EntityKind::Merchant]));
}

#[tokio::test(flavor = "current_thread")]
async fn load_cached_snapshot_reports_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, "{ definitely not json").unwrap();

    let error = load_cached_snapshot(&path).await.unwrap_err();
    assert!(matches!(error, CliError::UnreadableCache { .. }));
}

#[tokio::test(flavor = "current_thread")]
async fn clear_cache_removes_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    let store = zensync_core::FileSnapshotStore::new(&path);
    store
        .save_snapshot(&snapshot_with_merchants())
        .await
        .unwrap();

    let config = SyncConfig {
        cache_path: Some(path.clone()),
        ..Default::default()
    };
    run_clear_cache(&config).await.unwrap();

    assert!(!path.exists());
    assert!(load_cached_snapshot(&path).await.unwrap().is_none());
}
