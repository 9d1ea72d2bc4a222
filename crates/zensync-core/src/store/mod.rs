//! Durable storage for the merged snapshot.
//!
//! Store operations report failures honestly; deciding that a broken cache is
//! the same as no cache is left to the sync engine.

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Snapshot;

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Snapshot IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// Injected by the in-memory store's failure switches.
    #[cfg(test)]
    #[error("Snapshot store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait SnapshotPersistence: Send + Sync + 'static {
    /// Read the persisted snapshot; `Ok(None)` when nothing has been saved.
    async fn load_snapshot(&self) -> StoreResult<Option<Snapshot>>;
    /// Replace the persisted snapshot as a whole.
    async fn save_snapshot(&self, snapshot: &Snapshot) -> StoreResult<()>;
    /// Remove the persisted snapshot. Clearing an empty store succeeds.
    async fn clear_snapshot(&self) -> StoreResult<()>;
}
