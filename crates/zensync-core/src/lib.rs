//! zensync-core - Core library for zensync
//!
//! Keeps a local, incrementally synchronized replica of a ZenMoney account.
//! The server only offers "everything changed since timestamp T", so this
//! crate folds those diffs into one persisted snapshot served by
//! [`SyncEngine`].

pub mod config;
pub mod error;
pub mod merge;
pub mod models;
pub mod state;
pub mod store;
pub mod sync;

pub use config::SyncConfig;
pub use error::{Error, Result};
pub use models::{Diff, DiffRequest, EntityKind, Snapshot};
pub use state::CacheState;
pub use store::{FileSnapshotStore, MemorySnapshotStore, SnapshotPersistence};
pub use sync::{DiffFetcher, SyncEngine, ZenMoneyClient, ZenMoneySync};
