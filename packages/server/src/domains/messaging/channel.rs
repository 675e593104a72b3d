//! Member → admin message thread operations over the directory tables.

use chrono::{DateTime, Utc};

use crate::common::{MessageId, UserId};
use crate::domains::directory::{DirectoryError, DirectoryResult, DirectoryState};
use crate::domains::member::User;
use crate::domains::messaging::Message;

/// Append a message from `sender`. Every call creates a new message.
pub fn send(
    state: &mut DirectoryState,
    sender: &User,
    content: String,
    now: DateTime<Utc>,
) -> Message {
    let message = Message::new(sender, content, now);
    state.messages.push(message.clone());
    message
}

/// Set the admin reply. An existing reply is replaced and `repliedAt` moves
/// forward.
pub fn reply(
    state: &mut DirectoryState,
    message_id: MessageId,
    text: String,
    now: DateTime<Utc>,
) -> DirectoryResult<Message> {
    if text.trim().is_empty() {
        return Err(DirectoryError::validation("Reply cannot be empty"));
    }

    let message = find_mut(state, message_id)?;
    message.reply = Some(text);
    message.replied_at = Some(now);
    Ok(message.clone())
}

pub fn mark_read(state: &mut DirectoryState, message_id: MessageId) -> DirectoryResult<Message> {
    let message = find_mut(state, message_id)?;
    message.read = true;
    Ok(message.clone())
}

/// Remove a message. Returns whether anything was removed.
pub fn delete(state: &mut DirectoryState, message_id: MessageId) -> bool {
    let before = state.messages.len();
    state.messages.retain(|m| m.id != message_id);
    state.messages.len() != before
}

/// The admin sees every thread; a member sees only their own messages.
pub fn messages_for(state: &DirectoryState, viewer_id: UserId, is_admin: bool) -> Vec<Message> {
    state
        .messages
        .iter()
        .filter(|m| is_admin || m.sender_id == viewer_id)
        .cloned()
        .collect()
}

fn find_mut(state: &mut DirectoryState, message_id: MessageId) -> DirectoryResult<&mut Message> {
    state
        .messages
        .iter_mut()
        .find(|m| m.id == message_id)
        .ok_or(DirectoryError::MessageNotFound)
}
