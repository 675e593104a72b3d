// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseSnapshotStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::directory::DirectorySnapshot;

// =============================================================================
// Snapshot Store Trait (Infrastructure - persisted directory record)
// =============================================================================

/// Wholesale persistence of the directory.
///
/// `load` is called once at startup; `save` after every successful mutation
/// with the complete new snapshot. No incremental diffing or versioning.
#[async_trait]
pub trait BaseSnapshotStore: Send + Sync {
    /// Returns `None` when nothing has been saved yet
    async fn load(&self) -> Result<Option<DirectorySnapshot>>;

    async fn save(&self, snapshot: &DirectorySnapshot) -> Result<()>;
}

// =============================================================================
// Password Hasher Trait (Infrastructure - one-way salted credentials)
// =============================================================================

pub trait BasePasswordHasher: Send + Sync {
    /// Produce an opaque, salted, one-way credential string
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a stored credential
    fn verify(&self, password: &str, credential: &str) -> Result<bool>;
}
