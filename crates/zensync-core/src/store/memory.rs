//! In-process snapshot store

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

#[cfg(test)]
use super::StoreError;
use super::{SnapshotPersistence, StoreResult};
use crate::models::Snapshot;

#[derive(Debug, Default)]
struct MemoryState {
    snapshot: Option<Snapshot>,
    #[cfg(test)]
    faults: Faults,
}

/// Per-operation failure switches and a save counter for engine tests.
#[cfg(test)]
#[derive(Debug, Default)]
struct Faults {
    load: bool,
    save: bool,
    clear: bool,
    saves: usize,
}

/// Keeps the snapshot in memory for the lifetime of the process.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::new();
        store.lock().snapshot = Some(snapshot);
        store
    }

    /// Current contents, bypassing failure injection.
    pub fn peek(&self) -> Option<Snapshot> {
        self.lock().snapshot.clone()
    }

    /// Number of successful saves so far.
    #[cfg(test)]
    pub(crate) fn save_count(&self) -> usize {
        self.lock().faults.saves
    }

    #[cfg(test)]
    pub(crate) fn fail_loads(&self, fail: bool) {
        self.lock().faults.load = fail;
    }

    #[cfg(test)]
    pub(crate) fn fail_saves(&self, fail: bool) {
        self.lock().faults.save = fail;
    }

    #[cfg(test)]
    pub(crate) fn fail_clears(&self, fail: bool) {
        self.lock().faults.clear = fail;
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl SnapshotPersistence for MemorySnapshotStore {
    async fn load_snapshot(&self) -> StoreResult<Option<Snapshot>> {
        let state = self.lock();
        #[cfg(test)]
        {
            if state.faults.load {
                return Err(StoreError::Unavailable("load disabled".to_string()));
            }
        }
        Ok(state.snapshot.clone())
    }

    async fn save_snapshot(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let mut state = self.lock();
        #[cfg(test)]
        {
            if state.faults.save {
                return Err(StoreError::Unavailable("save disabled".to_string()));
            }
            state.faults.saves += 1;
        }
        state.snapshot = Some(snapshot.clone());
        Ok(())
    }

    async fn clear_snapshot(&self) -> StoreResult<()> {
        let mut state = self.lock();
        #[cfg(test)]
        {
            if state.faults.clear {
                return Err(StoreError::Unavailable("clear disabled".to_string()));
            }
        }
        state.snapshot = None;
        Ok(())
    }
}
