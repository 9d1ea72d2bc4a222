use zensync_core::{SyncConfig, ZenMoneySync};

use crate::commands::common::print_summary;
use crate::error::CliError;

pub async fn run_sync(config: &SyncConfig, as_json: bool) -> Result<(), CliError> {
    let engine = ZenMoneySync::from_config(config)?;
    let snapshot = engine.get_data().await?;
    print_summary(&snapshot, as_json)
}

pub async fn run_refresh(config: &SyncConfig, as_json: bool) -> Result<(), CliError> {
    let engine = ZenMoneySync::from_config(config)?;
    let snapshot = engine.refresh().await?;
    print_summary(&snapshot, as_json)
}
