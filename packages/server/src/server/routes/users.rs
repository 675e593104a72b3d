//! Directory endpoints: member listing, lookup and admin member management.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Deserialize;

use crate::common::{Capability, UserId};
use crate::domains::auth;
use crate::domains::directory::DirectoryError;
use crate::domains::member::{Profile, UserData};
use crate::server::app::AxumAppState;
use crate::server::error::{parse_id, ApiJson, ApiPath, ApiResult};
use crate::server::middleware::{require_auth, AuthUser};

/// Member registration by an administrator; the password is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub occupation: String,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub institution: Option<String>,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl From<NewMemberRequest> for Profile {
    fn from(req: NewMemberRequest) -> Self {
        Profile {
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
            occupation: req.occupation,
            is_student: req.is_student,
            institution: req.institution,
            email: req.email,
            password: req.password.unwrap_or_default(),
        }
    }
}

pub async fn list_members_handler(
    Extension(state): Extension<AxumAppState>,
) -> Json<Vec<UserData>> {
    let members = state.deps.directory.list_members().await;
    Json(members.into_iter().map(UserData::from).collect())
}

pub async fn get_user_handler(
    Extension(state): Extension<AxumAppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<UserData>> {
    let user_id: UserId = parse_id(&user_id, DirectoryError::UserNotFound)?;
    let user = state.deps.directory.get_user(user_id).await?;
    Ok(Json(UserData::from(user)))
}

pub async fn create_member_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiJson(input): ApiJson<NewMemberRequest>,
) -> ApiResult<(StatusCode, Json<UserData>)> {
    require_auth(auth_user)?
        .actor()
        .can(Capability::ManageMembers)
        .check()?;

    let user = auth::create_member(input.into(), &state.deps).await?;
    Ok((StatusCode::CREATED, Json(UserData::from(user))))
}

pub async fn delete_user_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    require_auth(auth_user)?
        .actor()
        .can(Capability::ManageMembers)
        .check()?;
    let user_id: UserId = parse_id(&user_id, DirectoryError::UserNotFound)?;

    state.deps.directory.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
