//! Shared state types.

/// Whether a sync engine currently holds a snapshot in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheState {
    /// Next `get_data` loads the persisted snapshot and fetches a diff.
    Empty,
    /// Next `get_data` returns the in-memory snapshot without network I/O.
    Cached,
}
