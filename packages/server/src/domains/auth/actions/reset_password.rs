//! Password reset action
//!
//! Recovery is proven only by knowing the account's email and phone together.

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};

use crate::common::mask_email;
use crate::domains::directory::{DirectoryError, DirectoryResult};
use crate::kernel::ServerDeps;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub email: String,
    pub phone: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub async fn reset_password(input: PasswordReset, deps: &ServerDeps) -> DirectoryResult<()> {
    let user = match deps
        .directory
        .find_by_email_and_phone(&input.email, &input.phone)
        .await
    {
        Ok(user) => user,
        Err(DirectoryError::UserNotFound) => {
            warn!(
                email = %mask_email(&input.email),
                "Password reset for unknown email/phone pair"
            );
            return Err(DirectoryError::validation(
                "No account found with this email and phone number combination",
            ));
        }
        Err(e) => return Err(e),
    };

    if input.new_password != input.confirm_password {
        return Err(DirectoryError::validation("Passwords do not match"));
    }
    if input.new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DirectoryError::validation(
            "Password must be at least 6 characters long",
        ));
    }

    let hashed = deps
        .password_hasher
        .hash(&input.new_password)
        .context("Failed to hash password")
        .map_err(DirectoryError::Storage)?;
    deps.directory.set_password(user.id, hashed).await?;

    info!(user_id = %user.id, "Password reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::test_support::{deps, profile};
    use crate::domains::auth::{login, register};

    fn reset(email: &str, phone: &str, new: &str, confirm: &str) -> PasswordReset {
        PasswordReset {
            email: email.to_string(),
            phone: phone.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_reset_replaces_credential() {
        let deps = deps().await;
        register(profile("a@x.com", "0712345678"), &deps).await.unwrap();

        reset_password(reset("a@x.com", "0712345678", "newpass", "newpass"), &deps)
            .await
            .unwrap();

        assert!(!login("a@x.com", "secret123", &deps).await.unwrap().success);
        assert!(login("a@x.com", "newpass", &deps).await.unwrap().success);
    }

    #[tokio::test]
    async fn test_reset_requires_matching_pair() {
        let deps = deps().await;
        register(profile("a@x.com", "0712345678"), &deps).await.unwrap();

        let err = reset_password(reset("a@x.com", "0799999999", "newpass", "newpass"), &deps)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "No account found with this email and phone number combination"
        );
    }

    #[tokio::test]
    async fn test_reset_validates_new_password() {
        let deps = deps().await;
        register(profile("a@x.com", "0712345678"), &deps).await.unwrap();

        let mismatch = reset_password(reset("a@x.com", "0712345678", "newpass", "other1"), &deps)
            .await
            .unwrap_err();
        let short = reset_password(reset("a@x.com", "0712345678", "abc", "abc"), &deps)
            .await
            .unwrap_err();

        assert!(matches!(mismatch, DirectoryError::Validation(_)));
        assert!(matches!(short, DirectoryError::Validation(_)));
        assert!(login("a@x.com", "secret123", &deps).await.unwrap().success);
    }
}
