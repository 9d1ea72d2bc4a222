use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] zensync_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Cached snapshot at {path} is unreadable: {reason}")]
    UnreadableCache { path: String, reason: String },
    #[error("Failed to remove cached snapshot at {path}: {reason}")]
    ClearCache { path: String, reason: String },
}
