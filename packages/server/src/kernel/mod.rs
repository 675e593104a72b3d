//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod password;
pub mod postgres_store;
pub mod snapshot_store;
pub mod storage;
pub mod traits;

pub use deps::ServerDeps;
pub use password::Argon2Hasher;
pub use postgres_store::PostgresSnapshotStore;
pub use snapshot_store::{FileSnapshotStore, MemorySnapshotStore};
pub use storage::open_snapshot_store;
pub use traits::*;
