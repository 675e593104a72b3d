//! In-memory tables and the user-table operations.
//!
//! Everything here is synchronous and side-effect free beyond `&mut self`;
//! persistence is layered on by [`super::Directory`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{DirectoryError, DirectoryResult};
use crate::common::UserId;
use crate::domains::announcements::Announcement;
use crate::domains::change_approval::PendingChange;
use crate::domains::member::{generate_member_id, EmailVerification, Profile, Role, User};
use crate::domains::messaging::Message;
use crate::kernel::BasePasswordHasher;

/// Check `password` against the user's stored credential. A credential that
/// cannot be read fails like a wrong password.
pub fn verify_credential(
    user: &User,
    password: &str,
    hasher: &dyn BasePasswordHasher,
) -> DirectoryResult<()> {
    match hasher.verify(password, &user.password) {
        Ok(true) => Ok(()),
        Ok(false) => Err(DirectoryError::InvalidCredentials),
        Err(e) => {
            warn!(user_id = %user.id, error = %e, "Stored credential could not be verified");
            Err(DirectoryError::InvalidCredentials)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryState {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub pending_changes: Vec<PendingChange>,
}

impl DirectoryState {
    /// Insert a new user built from `profile`.
    ///
    /// The member id is derived from the contact pair, the role is admin only
    /// for the reserved `admin_email`, and email starts unverified.
    pub fn create_user(
        &mut self,
        profile: Profile,
        admin_email: &str,
        now: DateTime<Utc>,
    ) -> DirectoryResult<User> {
        if self.find_by_email(&profile.email).is_some() {
            return Err(DirectoryError::DuplicateEmail);
        }

        let role = if profile.email == admin_email {
            Role::Admin
        } else {
            Role::Member
        };

        let user = User {
            id: UserId::new(),
            member_id: generate_member_id(&profile.email, &profile.phone),
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone: profile.phone,
            occupation: profile.occupation,
            is_student: profile.is_student,
            institution: profile.institution,
            password: profile.password,
            role,
            email_verified: EmailVerification::Unverified,
            created_at: now,
        };

        self.users.push(user.clone());
        Ok(user)
    }

    pub fn find_user(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub fn find_user_mut(&mut self, user_id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == user_id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Whether some user other than `except` already holds `email`.
    pub fn email_taken(&self, email: &str, except: UserId) -> bool {
        self.users.iter().any(|u| u.email == email && u.id != except)
    }

    /// Look up a user by email and check the password against the stored
    /// credential. Unknown email and wrong password fail identically.
    pub fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
        hasher: &dyn BasePasswordHasher,
    ) -> DirectoryResult<&User> {
        let user = self
            .find_by_email(email)
            .ok_or(DirectoryError::InvalidCredentials)?;
        verify_credential(user, password, hasher)?;
        Ok(user)
    }

    /// Recovery lookup: both fields must match exactly.
    pub fn find_by_email_and_phone(&self, email: &str, phone: &str) -> DirectoryResult<&User> {
        self.users
            .iter()
            .find(|u| u.email == email && u.phone == phone)
            .ok_or(DirectoryError::UserNotFound)
    }

    /// Unconditionally replace the stored credential.
    pub fn set_password(&mut self, user_id: UserId, password: String) -> DirectoryResult<()> {
        let user = self
            .find_user_mut(user_id)
            .ok_or(DirectoryError::UserNotFound)?;
        user.password = password;
        Ok(())
    }

    /// Remove a user. Messages, announcements and pending changes that refer
    /// to it are kept as history.
    pub fn delete_user(&mut self, user_id: UserId) -> DirectoryResult<User> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or(DirectoryError::UserNotFound)?;
        Ok(self.users.remove(index))
    }

    pub fn list_members(&self) -> Vec<User> {
        self.users.iter().filter(|u| !u.is_admin()).cloned().collect()
    }
}
