//! Demand-driven sync of the local snapshot against the diff endpoint.

mod client;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::merge::merge_diff;
use crate::models::{Diff, DiffRequest, EntityKind, Snapshot};
use crate::state::CacheState;
use crate::store::{FileSnapshotStore, SnapshotPersistence};

pub use client::{DiffFetcher, ZenMoneyClient};

/// Watermark that asks the server for its complete state.
pub const FULL_SYNC_TIMESTAMP: i64 = 0;

/// Owns the in-memory snapshot for one access token.
///
/// `get_data` calls are serialized: a caller arriving while another is
/// syncing waits and then receives the freshly cached snapshot.
pub struct SyncEngine<F, S> {
    fetcher: F,
    store: S,
    force_fetch: Option<Vec<EntityKind>>,
    cache: Mutex<Option<Arc<Snapshot>>>,
}

impl<F: DiffFetcher, S: SnapshotPersistence> SyncEngine<F, S> {
    pub fn new(fetcher: F, store: S) -> Self {
        Self {
            fetcher,
            store,
            force_fetch: None,
            cache: Mutex::new(None),
        }
    }

    /// Ask the server to resend these entity types in full on every fetch.
    #[must_use]
    pub fn with_force_fetch(mut self, kinds: Vec<EntityKind>) -> Self {
        self.force_fetch = Some(kinds).filter(|kinds| !kinds.is_empty());
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn state(&self) -> CacheState {
        if self.cache.lock().await.is_some() {
            CacheState::Cached
        } else {
            CacheState::Empty
        }
    }

    /// Return the current snapshot, syncing first if none is cached.
    ///
    /// A persisted snapshot is brought up to date with an incremental diff;
    /// without one, a full diff becomes the new snapshot. Fetch errors are
    /// returned as-is and leave both the cache and the store untouched.
    pub async fn get_data(&self) -> Result<Arc<Snapshot>> {
        let mut cache = self.cache.lock().await;
        if let Some(snapshot) = cache.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let snapshot = match self.load_persisted().await {
            Some(persisted) => {
                tracing::info!(
                    server_timestamp = persisted.server_timestamp,
                    "Running incremental sync"
                );
                let diff = self.fetch(persisted.server_timestamp).await?;
                log_diff(&diff);
                merge_diff(persisted, diff)
            }
            None => {
                tracing::info!("Running full sync");
                let diff = self.fetch(FULL_SYNC_TIMESTAMP).await?;
                log_diff(&diff);
                diff.into_snapshot()
            }
        };

        tracing::info!(
            server_timestamp = snapshot.server_timestamp,
            "Sync completed"
        );
        self.persist(&snapshot).await;

        let snapshot = Arc::new(snapshot);
        *cache = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop the in-memory snapshot and the persisted one.
    ///
    /// The in-memory copy is always dropped, even when clearing the store
    /// fails.
    pub async fn invalidate(&self) {
        let mut cache = self.cache.lock().await;
        *cache = None;
        if let Err(error) = self.store.clear_snapshot().await {
            tracing::warn!("Failed to clear persisted snapshot: {}", error);
        }
        tracing::info!("Snapshot cache invalidated");
    }

    /// Invalidate, then sync from scratch.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>> {
        self.invalidate().await;
        self.get_data().await
    }

    async fn fetch(&self, server_timestamp: i64) -> Result<Diff> {
        let request = DiffRequest {
            current_client_timestamp: chrono::Utc::now().timestamp(),
            server_timestamp,
            force_fetch: self.force_fetch.clone(),
        };
        self.fetcher.fetch_diff(&request).await
    }

    async fn load_persisted(&self) -> Option<Snapshot> {
        match self.store.load_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!("Ignoring unreadable persisted snapshot: {}", error);
                None
            }
        }
    }

    async fn persist(&self, snapshot: &Snapshot) {
        if let Err(error) = self.store.save_snapshot(snapshot).await {
            tracing::warn!("Failed to persist snapshot: {}", error);
        }
    }
}

/// Engine wired to the live API and the on-disk snapshot file.
pub type ZenMoneySync = SyncEngine<ZenMoneyClient, FileSnapshotStore>;

impl ZenMoneySync {
    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        let client = ZenMoneyClient::from_config(config)?;
        let store = FileSnapshotStore::new(config.resolved_cache_path()?);
        tracing::debug!("Using snapshot file {}", store.path().display());
        let force_fetch = config.force_fetch.clone().unwrap_or_default();
        Ok(Self::new(client, store).with_force_fetch(force_fetch))
    }
}

fn log_diff(diff: &Diff) {
    for kind in EntityKind::ALL {
        if let Some(count) = diff.len_of(kind).filter(|count| *count > 0) {
            tracing::debug!(entity = %kind, count, "Diff upserts");
        }
    }
    if let Some(deletions) = diff.deletion.as_ref().filter(|d| !d.is_empty()) {
        tracing::debug!(count = deletions.len(), "Diff deletions");
    }
}
