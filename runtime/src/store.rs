//! Snapshot Stores
//!
//! Durable, best-effort persistence of the flow snapshot. Stores report
//! failures through [`StoreError`] at the trait seam; the session layer
//! swallows them with a warning so the flow degrades to non-persistent
//! operation instead of dead-ending the user.
//!
//! Snapshots are kept as a single JSON document under a fixed
//! namespace, mirroring the one-slot key-value contract of browser
//! local storage. A document that fails to decode is reported as
//! absent, never as a crash (there is no schema versioning).

use async_trait::async_trait;
use leadflow_core::Snapshot;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::Mutex;

/// Fixed namespace for the one snapshot slot.
pub const SNAPSHOT_NAMESPACE: &str = "leadflow_connect_v2";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encode failure: {0}")]
    Encode(#[source] serde_json::Error),
}

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
    /// `Ok(None)` covers both "never saved" and "saved but undecodable".
    async fn load(&self) -> Result<Option<Snapshot>, StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory store. Holds the serialized document rather than the
/// snapshot value so the codec path is exercised exactly like a real
/// backend. Also the test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let doc = serde_json::to_string(snapshot).map_err(StoreError::Encode)?;
        *self.slot.lock().await = Some(doc);
        Ok(())
    }

    async fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let slot = self.slot.lock().await;
        Ok(slot
            .as_deref()
            .and_then(|doc| serde_json::from_str(doc).ok()))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().await = None;
        Ok(())
    }
}

/// File-backed store: one JSON document at a fixed path. Writes go
/// through a sibling temp file and a rename so a crash mid-write leaves
/// the previous snapshot intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted in a directory, using the fixed namespace as the
    /// file name.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let mut path = dir.into();
        path.push(format!("{SNAPSHOT_NAMESPACE}.json"));
        Self { path }
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl SnapshotStore for FileStore {
    async fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let doc = serde_json::to_vec_pretty(snapshot).map_err(StoreError::Encode)?;
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &doc).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(doc) => Ok(serde_json::from_slice(&doc).ok()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
