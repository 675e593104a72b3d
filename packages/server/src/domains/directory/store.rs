//! The persisted directory handle.
//!
//! `Directory` owns the authoritative snapshot behind a lock. Mutations run
//! against a working copy, the copy is saved through the configured
//! [`BaseSnapshotStore`], and only then replaces the visible state. A failed
//! save leaves the directory exactly as it was.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::state::verify_credential;
use super::{DirectoryError, DirectoryResult, DirectorySnapshot, DirectoryState};
use crate::common::UserId;
use crate::domains::member::{Profile, User};
use crate::kernel::{BasePasswordHasher, BaseSnapshotStore};

pub struct Directory {
    snapshot: RwLock<DirectorySnapshot>,
    store: Arc<dyn BaseSnapshotStore>,
    admin_email: String,
}

impl Directory {
    /// Load the last saved snapshot, or start empty if none exists.
    pub async fn open(store: Arc<dyn BaseSnapshotStore>, admin_email: String) -> Result<Self> {
        let snapshot = store
            .load()
            .await
            .context("Failed to load directory snapshot")?;

        match &snapshot {
            Some(s) => info!(
                users = s.state.users.len(),
                messages = s.state.messages.len(),
                announcements = s.state.announcements.len(),
                pending_changes = s.state.pending_changes.len(),
                "Directory rehydrated"
            ),
            None => info!("No saved directory found, starting empty"),
        }

        Ok(Self {
            snapshot: RwLock::new(snapshot.unwrap_or_default()),
            store,
            admin_email,
        })
    }

    /// The reserved bootstrap administrator address.
    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Run a read-only query against the current snapshot.
    pub async fn read<T>(&self, query: impl FnOnce(&DirectorySnapshot) -> T) -> T {
        let guard = self.snapshot.read().await;
        query(&guard)
    }

    /// Apply a mutation atomically and persist the result.
    pub async fn commit<T>(
        &self,
        mutation: impl FnOnce(&mut DirectorySnapshot) -> DirectoryResult<T>,
    ) -> DirectoryResult<T> {
        let mut guard = self.snapshot.write().await;
        let mut working = guard.clone();
        let output = mutation(&mut working)?;

        self.store
            .save(&working)
            .await
            .context("Failed to save directory snapshot")
            .map_err(DirectoryError::Storage)?;
        debug!("Directory snapshot saved");

        *guard = working;
        Ok(output)
    }

    // ------------------------------------------------------------------
    // User table
    // ------------------------------------------------------------------

    pub async fn create_user(&self, profile: Profile) -> DirectoryResult<User> {
        let admin_email = self.admin_email.clone();
        let user = self
            .commit(|s| s.state.create_user(profile, &admin_email, Utc::now()))
            .await?;
        info!(user_id = %user.id, role = ?user.role, "User created");
        Ok(user)
    }

    pub async fn get_user(&self, user_id: UserId) -> DirectoryResult<User> {
        self.read(|s| s.state.find_user(user_id).cloned())
            .await
            .ok_or(DirectoryError::UserNotFound)
    }

    /// Same contract as [`DirectoryState::find_by_credentials`], but the hash
    /// is checked after the read lock is released.
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
        hasher: &dyn BasePasswordHasher,
    ) -> DirectoryResult<User> {
        let user = self
            .read(|s| s.state.find_by_email(email).cloned())
            .await
            .ok_or(DirectoryError::InvalidCredentials)?;

        verify_credential(&user, password, hasher)?;
        Ok(user)
    }

    pub async fn find_by_email_and_phone(&self, email: &str, phone: &str) -> DirectoryResult<User> {
        self.read(|s| s.state.find_by_email_and_phone(email, phone).cloned())
            .await
    }

    pub async fn set_password(&self, user_id: UserId, password: String) -> DirectoryResult<()> {
        self.commit(|s| s.state.set_password(user_id, password))
            .await?;
        info!(user_id = %user_id, "Password replaced");
        Ok(())
    }

    pub async fn delete_user(&self, user_id: UserId) -> DirectoryResult<User> {
        let removed = self
            .commit(|s| {
                let removed = s.state.delete_user(user_id)?;
                if s.current_user.as_ref().is_some_and(|u| u.id == user_id) {
                    s.current_user = None;
                }
                Ok(removed)
            })
            .await?;
        info!(user_id = %user_id, "User deleted");
        Ok(removed)
    }

    pub async fn list_members(&self) -> Vec<User> {
        self.read(|s| s.state.list_members()).await
    }

    // ------------------------------------------------------------------
    // Embedded session
    // ------------------------------------------------------------------

    pub async fn current_user(&self) -> Option<User> {
        self.read(|s| s.current_user.clone()).await
    }

    pub async fn sign_in(&self, user: &User) -> DirectoryResult<()> {
        let user = user.clone();
        self.commit(|s| {
            s.current_user = Some(user);
            Ok(())
        })
        .await
    }

    pub async fn sign_out(&self) -> DirectoryResult<()> {
        self.commit(|s| {
            s.current_user = None;
            Ok(())
        })
        .await
    }

    /// Copy of the full table set, for callers that iterate.
    pub async fn state(&self) -> DirectoryState {
        self.read(|s| s.state.clone()).await
    }
}
