//! Skip email verification action

use tracing::info;

use crate::common::UserId;
use crate::domains::directory::{DirectoryError, DirectoryResult};
use crate::domains::member::{EmailVerification, User};
use crate::kernel::ServerDeps;

/// Mark the user's email verification as skipped. Keeps the embedded session
/// in step when it holds the same user.
pub async fn skip_verification(user_id: UserId, deps: &ServerDeps) -> DirectoryResult<User> {
    let user = deps
        .directory
        .commit(|s| {
            let user = s
                .state
                .find_user_mut(user_id)
                .ok_or(DirectoryError::UserNotFound)?;
            user.email_verified = EmailVerification::Skipped;
            let user = user.clone();

            if let Some(current) = s.current_user.as_mut() {
                if current.id == user_id {
                    *current = user.clone();
                }
            }
            Ok(user)
        })
        .await?;

    info!(user_id = %user_id, "Email verification skipped");
    Ok(user)
}
