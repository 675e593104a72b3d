//! Bootstrap administrator seeding

use anyhow::Context;
use chrono::Utc;
use tracing::info;

use crate::domains::directory::{Directory, DirectoryError, DirectoryResult};
use crate::domains::member::{validate_phone, EmailVerification, Profile, User};
use crate::kernel::BasePasswordHasher;

/// Member id reserved for the bootstrap administrator
pub const ADMIN_MEMBER_ID: &str = "00001";

/// Create the administrator account at the directory's reserved address.
///
/// Returns `None` when it already exists; the existing account is untouched.
pub async fn ensure_admin(
    directory: &Directory,
    hasher: &dyn BasePasswordHasher,
    password: &str,
    phone: &str,
) -> DirectoryResult<Option<User>> {
    let admin_email = directory.admin_email().to_string();
    if directory
        .read(|s| s.state.find_by_email(&admin_email).is_some())
        .await
    {
        info!("Administrator already exists");
        return Ok(None);
    }

    validate_phone(phone)?;

    let password = hasher
        .hash(password)
        .context("Failed to hash password")
        .map_err(DirectoryError::Storage)?;
    let profile = Profile {
        first_name: "Admin".to_string(),
        last_name: "Next".to_string(),
        phone: phone.to_string(),
        occupation: "Administrator".to_string(),
        is_student: false,
        institution: None,
        email: admin_email.clone(),
        password,
    };

    let admin = directory
        .commit(|s| {
            let created = s.state.create_user(profile, &admin_email, Utc::now())?;
            let user = s
                .state
                .find_user_mut(created.id)
                .ok_or(DirectoryError::UserNotFound)?;
            user.member_id = ADMIN_MEMBER_ID.to_string();
            user.email_verified = EmailVerification::Verified;
            Ok(user.clone())
        })
        .await?;

    info!(user_id = %admin.id, "Administrator created");
    Ok(Some(admin))
}
