use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{MessageId, UserId};
use crate::domains::member::User;

/// A member's message to the administrator.
///
/// Sender contact details are copied at send time; later profile changes do
/// not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub sender_email: String,
    pub sender_phone: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn new(sender: &User, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::new(),
            sender_id: sender.id,
            sender_email: sender.email.clone(),
            sender_phone: sender.phone.clone(),
            content,
            timestamp: now,
            read: false,
            reply: None,
            replied_at: None,
        }
    }
}
