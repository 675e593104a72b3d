use serde::{Deserialize, Serialize};

use super::DirectoryState;
use crate::domains::member::User;

/// The persisted record: the embedded session's current user plus every
/// table. Serialized as
/// `{currentUser, users, messages, announcements, pendingChanges}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySnapshot {
    #[serde(default)]
    pub current_user: Option<User>,
    #[serde(flatten)]
    pub state: DirectoryState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_snapshot_shape() {
        let value = serde_json::to_value(DirectorySnapshot::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "currentUser": null,
                "users": [],
                "messages": [],
                "announcements": [],
                "pendingChanges": []
            })
        );
    }

    #[test]
    fn test_missing_tables_default_to_empty() {
        let snapshot: DirectorySnapshot = serde_json::from_value(json!({"users": []})).unwrap();
        assert_eq!(snapshot, DirectorySnapshot::default());
    }
}
