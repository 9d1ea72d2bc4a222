//! Single-file JSON snapshot store

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{SnapshotPersistence, StoreResult};
use crate::models::Snapshot;

/// Stores the snapshot as one JSON document at a fixed path.
///
/// Writes go to a sibling temporary file first and are renamed into place, so
/// a reader sees either the previous snapshot or the new one.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotPersistence for FileSnapshotStore {
    async fn load_snapshot(&self) -> StoreResult<Option<Snapshot>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        Ok(Some(serde_json::from_slice(&raw)?))
    }

    async fn save_snapshot(&self, snapshot: &Snapshot) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let serialized = serde_json::to_vec(snapshot)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, serialized).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }

    async fn clear_snapshot(&self) -> StoreResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::fixtures::{budget, merchant, transaction, user};
    use crate::store::StoreError;
    use pretty_assertions::assert_eq;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            server_timestamp: 1_700_000_000,
            user: Some(vec![user(1, "owner")]),
            merchant: Some(vec![merchant("m1", "Cafe")]),
            budget: Some(vec![budget(None, "2024-01-01", 5.0)]),
            transaction: Some(vec![transaction("x", 12.5)]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("snapshot.json"));
        assert!(store.load_snapshot().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("nested").join("snapshot.json"));

        store.save_snapshot(&sample_snapshot()).await.unwrap();
        let loaded = store.load_snapshot().await.unwrap();
        assert_eq!(loaded, Some(sample_snapshot()));
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn corrupt_file_reports_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, b"{\"serverTimestamp\": 12, \"transaction\": [").unwrap();

        let store = FileSnapshotStore::new(&path);
        let error = store.load_snapshot().await.unwrap_err();
        assert!(matches!(error, StoreError::Corrupt(_)));
    }

    #[tokio::test]
    async fn clear_removes_file_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("snapshot.json"));

        store.save_snapshot(&sample_snapshot()).await.unwrap();
        store.clear_snapshot().await.unwrap();
        assert!(!store.path().exists());
        store.clear_snapshot().await.unwrap();
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let store = FileSnapshotStore::new("/var/cache/zensync/snapshot.json");
        assert_eq!(
            store.temp_path(),
            PathBuf::from("/var/cache/zensync/snapshot.json.tmp")
        );
    }
}
