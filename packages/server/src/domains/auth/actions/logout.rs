//! Logout action

use tracing::info;

use crate::common::UserId;
use crate::domains::directory::DirectoryResult;
use crate::kernel::ServerDeps;

/// End the embedded session if `user_id` holds it. Another user's session is
/// left alone. Returns whether a session was cleared.
pub async fn logout(user_id: UserId, deps: &ServerDeps) -> DirectoryResult<bool> {
    let holds_session = deps
        .directory
        .current_user()
        .await
        .is_some_and(|u| u.id == user_id);

    if holds_session {
        deps.directory.sign_out().await?;
    }

    info!(user_id = %user_id, signed_out = holds_session, "User logged out");
    Ok(holds_session)
}
