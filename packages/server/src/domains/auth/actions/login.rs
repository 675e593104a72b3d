//! Login action

use tracing::{info, warn};

use crate::common::mask_email;
use crate::domains::auth::LoginOutcome;
use crate::domains::directory::{DirectoryError, DirectoryResult};
use crate::kernel::ServerDeps;

/// Check credentials and start the embedded session.
///
/// Credential failures come back as an unsuccessful [`LoginOutcome`]; only a
/// storage failure while recording the session is an error.
pub async fn login(email: &str, password: &str, deps: &ServerDeps) -> DirectoryResult<LoginOutcome> {
    let user = match deps
        .directory
        .find_by_credentials(email, password, deps.password_hasher.as_ref())
        .await
    {
        Ok(user) => user,
        Err(DirectoryError::InvalidCredentials) => {
            warn!(email = %mask_email(email), "Login failed");
            return Ok(LoginOutcome::failed(
                DirectoryError::InvalidCredentials.to_string(),
            ));
        }
        Err(e) => return Err(e),
    };

    deps.directory.sign_in(&user).await?;
    info!(user_id = %user.id, "User logged in");
    Ok(LoginOutcome::succeeded(&user))
}
