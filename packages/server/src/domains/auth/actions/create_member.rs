//! Admin-created member action

use tracing::info;

use crate::domains::auth::register;
use crate::domains::directory::DirectoryResult;
use crate::domains::member::{Profile, User};
use crate::kernel::ServerDeps;

/// Password given to members an administrator registers without one.
pub const DEFAULT_MEMBER_PASSWORD: &str = "defaultPassword123";

/// Register a member on their behalf. Same validation as self-registration.
pub async fn create_member(mut profile: Profile, deps: &ServerDeps) -> DirectoryResult<User> {
    if profile.password.is_empty() {
        profile.password = DEFAULT_MEMBER_PASSWORD.to_string();
    }

    let user = register(profile, deps).await?;
    info!(user_id = %user.id, "Member created by administrator");
    Ok(user)
}
