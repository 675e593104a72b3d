//! Snapshot store selection from configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use super::{BaseSnapshotStore, FileSnapshotStore, MemorySnapshotStore, PostgresSnapshotStore};
use crate::config::{StorageBackend, StorageConfig};

/// Build the configured snapshot store. The Postgres backend connects and
/// runs pending migrations first.
pub async fn open_snapshot_store(config: &StorageConfig) -> Result<Arc<dyn BaseSnapshotStore>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory directory storage (not persisted)");
            Ok(Arc::new(MemorySnapshotStore::new()))
        }
        StorageBackend::File => {
            info!(path = %config.path.display(), "Using file directory storage");
            Ok(Arc::new(FileSnapshotStore::new(config.path.clone())))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for postgres storage")?;

            info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            info!(key = %config.key, "Using postgres directory storage");

            Ok(Arc::new(PostgresSnapshotStore::new(pool, config.key.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_backend_round_trips_through_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: dir.path().join("directory.json"),
            key: "unused".to_string(),
            database_url: None,
        };

        let store = open_snapshot_store(&config).await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        store.save(&Default::default()).await.unwrap();

        assert!(config.path.exists());
    }

    #[tokio::test]
    async fn test_postgres_backend_needs_url() {
        let config = StorageConfig {
            backend: StorageBackend::Postgres,
            path: "unused".into(),
            key: "unused".to_string(),
            database_url: None,
        };

        assert!(open_snapshot_store(&config).await.is_err());
    }
}
