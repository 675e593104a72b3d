use serde::{Deserialize, Serialize};

use crate::domains::member::{User, UserData};

/// Result of a login attempt.
///
/// Unknown email and wrong password produce the same failure so callers
/// cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginOutcome {
    pub fn succeeded(user: &User) -> Self {
        Self {
            success: true,
            user: Some(UserData::from(user)),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            error: Some(error.into()),
        }
    }
}
