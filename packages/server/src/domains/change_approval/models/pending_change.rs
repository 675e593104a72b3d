use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ChangeId, UserId};
use crate::domains::member::ContactUpdates;

/// Lifecycle of a proposal. Only `Pending` is ever stored; resolving a change
/// removes it and reports the terminal state through [`ChangeOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

/// An administrator's proposed edit to a member's protected fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingChange {
    pub id: ChangeId,
    pub user_id: UserId,
    pub updates: ContactUpdates,
    #[serde(default)]
    pub status: ChangeStatus,
    pub created_at: DateTime<Utc>,
}

/// Result of resolving a change, returned instead of raising.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeOutcome {
    pub success: bool,
    pub message: String,
}

impl ChangeOutcome {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: "Change was successful".to_string(),
        }
    }

    pub fn declined() -> Self {
        Self {
            success: true,
            message: "Change declined by the user".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
