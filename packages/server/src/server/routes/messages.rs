//! Member ↔ administrator message thread endpoints.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Deserialize;

use crate::common::{Capability, MessageId};
use crate::domains::messaging::{actions, MessageData};
use crate::server::app::AxumAppState;
use crate::domains::directory::DirectoryError;
use crate::server::error::{parse_id, ApiJson, ApiPath, ApiResult};
use crate::server::middleware::{require_auth, AuthUser};

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub reply: String,
}

pub async fn list_messages_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> ApiResult<Json<Vec<MessageData>>> {
    let auth = require_auth(auth_user)?;
    let messages = actions::messages_for(auth.user_id, auth.is_admin, &state.deps).await;
    Ok(Json(messages.into_iter().map(MessageData::from).collect()))
}

pub async fn send_message_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiJson(input): ApiJson<SendMessageRequest>,
) -> ApiResult<(StatusCode, Json<MessageData>)> {
    let auth = require_auth(auth_user)?;
    auth.actor().can(Capability::SendMessage).check()?;

    let message = actions::send_message(auth.user_id, input.content, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(MessageData::from(message))))
}

pub async fn reply_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiPath(message_id): ApiPath<String>,
    ApiJson(input): ApiJson<ReplyRequest>,
) -> ApiResult<Json<MessageData>> {
    require_auth(auth_user)?
        .actor()
        .can(Capability::ManageMessages)
        .check()?;
    let message_id: MessageId = parse_id(&message_id, DirectoryError::MessageNotFound)?;

    let message = actions::reply_to_message(message_id, input.reply, &state.deps).await?;
    Ok(Json(MessageData::from(message)))
}

pub async fn mark_read_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiPath(message_id): ApiPath<String>,
) -> ApiResult<Json<MessageData>> {
    require_auth(auth_user)?
        .actor()
        .can(Capability::ManageMessages)
        .check()?;
    let message_id: MessageId = parse_id(&message_id, DirectoryError::MessageNotFound)?;

    let message = actions::mark_message_read(message_id, &state.deps).await?;
    Ok(Json(MessageData::from(message)))
}

pub async fn delete_message_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiPath(message_id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    require_auth(auth_user)?
        .actor()
        .can(Capability::ManageMessages)
        .check()?;

    // Unparseable ids name no message; deleting an absent one is a no-op
    if let Ok(message_id) = MessageId::parse(&message_id) {
        actions::delete_message(message_id, &state.deps).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
