//! In-memory and JSON-file snapshot stores.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::BaseSnapshotStore;
use crate::domains::directory::DirectorySnapshot;

// =============================================================================
// Memory
// =============================================================================

/// Keeps the last saved snapshot in process memory.
#[derive(Default)]
pub struct MemorySnapshotStore {
    saved: Mutex<Option<DirectorySnapshot>>,
    saves: AtomicUsize,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseSnapshotStore for MemorySnapshotStore {
    async fn load(&self) -> Result<Option<DirectorySnapshot>> {
        let saved = self
            .saved
            .lock()
            .map_err(|_| anyhow!("memory snapshot lock poisoned"))?;
        Ok(saved.clone())
    }

    async fn save(&self, snapshot: &DirectorySnapshot) -> Result<()> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| anyhow!("memory snapshot lock poisoned"))?;
        *saved = Some(snapshot.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// =============================================================================
// JSON file
// =============================================================================

/// One JSON document on disk, rewritten wholesale on every save.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a crash mid-write never leaves a truncated record behind.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl BaseSnapshotStore for FileSnapshotStore {
    async fn load(&self) -> Result<Option<DirectorySnapshot>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        let snapshot = serde_json::from_slice(&bytes)
            .with_context(|| format!("Corrupt directory snapshot at {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &DirectorySnapshot) -> Result<()> {
        let body = serde_json::to_vec_pretty(snapshot).context("Failed to encode snapshot")?;
        let temp = self.temp_path();

        tokio::fs::write(&temp, &body)
            .await
            .with_context(|| format!("Failed to write {}", temp.display()))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        debug!(path = %self.path.display(), bytes = body.len(), "Snapshot written");
        Ok(())
    }
}
