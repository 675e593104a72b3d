//! Registration, login and account recovery endpoints.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::domains::auth::{self as auth_domain, PasswordReset};
use crate::domains::directory::DirectoryError;
use crate::domains::member::{Profile, Role, UserData};
use crate::server::app::AxumAppState;
use crate::server::error::{ApiJson, ApiResult};
use crate::server::middleware::{require_auth, AuthUser};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login body: the masked user plus a session token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserData,
    pub token: String,
}

pub async fn register_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(profile): ApiJson<Profile>,
) -> ApiResult<(StatusCode, Json<UserData>)> {
    let user = auth_domain::register(profile, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(UserData::from(user))))
}

pub async fn login_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> ApiResult<axum::response::Response> {
    let outcome = auth_domain::login(&input.email, &input.password, &state.deps).await?;

    let user = match (outcome.success, outcome.user) {
        (true, Some(user)) => user,
        _ => {
            let message = outcome
                .error
                .unwrap_or_else(|| DirectoryError::InvalidCredentials.to_string());
            return Ok((StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response());
        }
    };

    let token = state
        .deps
        .jwt_service
        .create_token(user.id, user.role == Role::Admin)
        .map_err(|e| {
            error!(error = %e, "Failed to create session token");
            DirectoryError::Storage(e)
        })?;

    Ok(Json(LoginResponse { user, token }).into_response())
}

/// Ends the embedded session when the caller holds it. Bearer tokens are
/// stateless and simply expire.
pub async fn logout_handler(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<serde_json::Value>> {
    let auth = require_auth(auth)?;
    auth_domain::logout(auth.user_id, &state.deps).await?;
    Ok(Json(json!({ "message": "Logged out" })))
}

pub async fn password_reset_handler(
    Extension(state): Extension<AxumAppState>,
    ApiJson(input): ApiJson<PasswordReset>,
) -> ApiResult<Json<serde_json::Value>> {
    auth_domain::reset_password(input, &state.deps).await?;
    Ok(Json(json!({ "message": "Password reset successfully" })))
}

pub async fn skip_verification_handler(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
) -> ApiResult<Json<UserData>> {
    let auth = require_auth(auth)?;
    let user = auth_domain::skip_verification(auth.user_id, &state.deps).await?;
    Ok(Json(UserData::from(user)))
}
