//! Register action

use anyhow::Context;
use tracing::info;

use crate::domains::directory::{DirectoryError, DirectoryResult};
use crate::domains::member::{validate_phone, Profile, User};
use crate::kernel::ServerDeps;

/// Register a new user.
///
/// The phone is checked before anything is stored and the password is hashed
/// here; the directory only ever sees the hashed credential.
pub async fn register(mut profile: Profile, deps: &ServerDeps) -> DirectoryResult<User> {
    validate_phone(&profile.phone)?;

    profile.password = deps
        .password_hasher
        .hash(&profile.password)
        .context("Failed to hash password")
        .map_err(DirectoryError::Storage)?;

    let user = deps.directory.create_user(profile).await?;
    info!(user_id = %user.id, member_id = %user.member_id, "User registered");
    Ok(user)
}
