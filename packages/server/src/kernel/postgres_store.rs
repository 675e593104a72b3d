//! Postgres-backed snapshot store.
//!
//! The whole directory lives in a single JSONB row keyed by record name,
//! upserted wholesale. Schema: `migrations/0001_directory_snapshots.sql`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;

use super::BaseSnapshotStore;
use crate::domains::directory::DirectorySnapshot;

pub struct PostgresSnapshotStore {
    pool: PgPool,
    name: String,
}

impl PostgresSnapshotStore {
    pub fn new(pool: PgPool, name: impl Into<String>) -> Self {
        Self {
            pool,
            name: name.into(),
        }
    }
}

#[async_trait]
impl BaseSnapshotStore for PostgresSnapshotStore {
    async fn load(&self) -> Result<Option<DirectorySnapshot>> {
        let row = sqlx::query_scalar::<_, Json<DirectorySnapshot>>(
            "SELECT body FROM directory_snapshots WHERE name = $1",
        )
        .bind(&self.name)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to load snapshot '{}'", self.name))?;

        Ok(row.map(|Json(snapshot)| snapshot))
    }

    async fn save(&self, snapshot: &DirectorySnapshot) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO directory_snapshots (name, body, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (name) DO UPDATE
               SET body = EXCLUDED.body,
                   updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&self.name)
        .bind(Json(snapshot))
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to save snapshot '{}'", self.name))?;

        debug!(name = %self.name, "Snapshot upserted");
        Ok(())
    }
}
