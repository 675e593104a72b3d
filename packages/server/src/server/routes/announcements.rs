//! Announcement endpoints.

use axum::{extract::Extension, http::StatusCode, Json};

use crate::common::{AnnouncementId, Capability};
use crate::domains::announcements::{actions, Announcement, NewAnnouncement};
use crate::server::app::AxumAppState;
use crate::domains::directory::DirectoryError;
use crate::server::error::{parse_id, ApiJson, ApiPath, ApiResult};
use crate::server::middleware::{require_auth, AuthUser};

/// Admins get every announcement, expired ones included; members get what is
/// currently visible to them.
pub async fn list_announcements_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> ApiResult<Json<Vec<Announcement>>> {
    let auth = require_auth(auth_user)?;

    let announcements = if auth.is_admin {
        actions::list_announcements(&state.deps).await
    } else {
        actions::announcements_for(auth.user_id, &state.deps).await
    };
    Ok(Json(announcements))
}

pub async fn create_announcement_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiJson(input): ApiJson<NewAnnouncement>,
) -> ApiResult<(StatusCode, Json<Announcement>)> {
    let auth = require_auth(auth_user)?;
    auth.actor().can(Capability::ManageAnnouncements).check()?;

    let announcement = actions::create_announcement(input, auth.user_id, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

pub async fn delete_announcement_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiPath(announcement_id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    require_auth(auth_user)?
        .actor()
        .can(Capability::ManageAnnouncements)
        .check()?;
    let announcement_id: AnnouncementId =
        parse_id(&announcement_id, DirectoryError::AnnouncementNotFound)?;

    actions::delete_announcement(announcement_id, &state.deps).await?;
    Ok(StatusCode::NO_CONTENT)
}
