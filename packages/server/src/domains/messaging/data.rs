use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::common::{mask_phone, MessageId, UserId};
use crate::domains::messaging::Message;

/// Message as returned to API clients; the sender phone is masked.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    pub id: MessageId,
    pub sender_id: UserId,
    pub sender_email: String,
    pub sender_phone: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<DateTime<Utc>>,
}

impl From<Message> for MessageData {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            sender_email: message.sender_email,
            sender_phone: mask_phone(&message.sender_phone),
            content: message.content,
            timestamp: message.timestamp,
            read: message.read,
            reply: message.reply,
            replied_at: message.replied_at,
        }
    }
}
