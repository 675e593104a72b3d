//! Messaging actions - persisted, logged wrappers over the channel operations.
//!
//! Authorization (member sends, admin replies/deletes) is checked by the
//! caller before these run.

use chrono::Utc;
use tracing::info;

use crate::common::{MessageId, UserId};
use crate::domains::directory::{DirectoryError, DirectoryResult};
use crate::domains::messaging::{channel, Message};
use crate::kernel::ServerDeps;

/// Send a message from `sender_id` to the administrator.
pub async fn send_message(
    sender_id: UserId,
    content: String,
    deps: &ServerDeps,
) -> DirectoryResult<Message> {
    let message = deps
        .directory
        .commit(|s| {
            let sender = s
                .state
                .find_user(sender_id)
                .cloned()
                .ok_or(DirectoryError::UserNotFound)?;
            Ok(channel::send(&mut s.state, &sender, content, Utc::now()))
        })
        .await?;

    info!(message_id = %message.id, sender_id = %sender_id, "Message sent");
    Ok(message)
}

pub async fn reply_to_message(
    message_id: MessageId,
    text: String,
    deps: &ServerDeps,
) -> DirectoryResult<Message> {
    let message = deps
        .directory
        .commit(|s| channel::reply(&mut s.state, message_id, text, Utc::now()))
        .await?;

    info!(message_id = %message_id, "Message replied");
    Ok(message)
}

pub async fn mark_message_read(
    message_id: MessageId,
    deps: &ServerDeps,
) -> DirectoryResult<Message> {
    deps.directory
        .commit(|s| channel::mark_read(&mut s.state, message_id))
        .await
}

/// Remove a message. Deleting an absent message is not an error.
pub async fn delete_message(message_id: MessageId, deps: &ServerDeps) -> DirectoryResult<()> {
    let removed = deps
        .directory
        .commit(|s| Ok(channel::delete(&mut s.state, message_id)))
        .await?;

    info!(message_id = %message_id, removed, "Message deleted");
    Ok(())
}

pub async fn messages_for(viewer_id: UserId, is_admin: bool, deps: &ServerDeps) -> Vec<Message> {
    deps.directory
        .read(|s| channel::messages_for(&s.state, viewer_id, is_admin))
        .await
}
