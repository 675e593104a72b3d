//! Change-approval endpoints.
//!
//! Admins propose; only the targeted member resolves.

use axum::{extract::Extension, http::StatusCode, Json};

use crate::common::{Capability, ChangeId, UserId};
use crate::domains::change_approval::{actions, workflow, ChangeOutcome, PendingChange};
use crate::domains::directory::DirectoryError;
use crate::domains::member::ContactUpdates;
use crate::server::app::AxumAppState;
use crate::server::error::{parse_id, ApiJson, ApiPath, ApiResult};
use crate::server::middleware::{require_auth, AuthUser};

pub async fn propose_change_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiPath(user_id): ApiPath<String>,
    ApiJson(updates): ApiJson<ContactUpdates>,
) -> ApiResult<(StatusCode, Json<PendingChange>)> {
    require_auth(auth_user)?
        .actor()
        .can(Capability::ProposeChanges)
        .check()?;
    let user_id: UserId = parse_id(&user_id, DirectoryError::UserNotFound)?;

    let change = actions::propose_change(user_id, updates, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(change)))
}

/// Admins see every pending change; members see those targeting them.
pub async fn list_changes_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> ApiResult<Json<Vec<PendingChange>>> {
    let auth = require_auth(auth_user)?;

    let changes = if auth.is_admin {
        actions::list_pending_changes(&state.deps).await
    } else {
        actions::changes_for(auth.user_id, &state.deps).await
    };
    Ok(Json(changes))
}

pub async fn accept_change_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiPath(change_id): ApiPath<String>,
) -> ApiResult<(StatusCode, Json<ChangeOutcome>)> {
    let auth = require_auth(auth_user)?;

    // Unparseable ids fail the same way as ids with no pending change
    let Ok(change_id) = ChangeId::parse(&change_id) else {
        let outcome = workflow::accept_failure(DirectoryError::ChangeNotFound)?;
        return Ok((outcome_status(&outcome), Json(outcome)));
    };

    if let Some(target) = actions::change_target(change_id, &state.deps).await {
        auth.actor()
            .can(Capability::ResolveChange { target })
            .check()?;
    }

    let outcome = actions::accept_change(change_id, &state.deps).await?;
    Ok((outcome_status(&outcome), Json(outcome)))
}

pub async fn decline_change_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    ApiPath(change_id): ApiPath<String>,
) -> ApiResult<Json<ChangeOutcome>> {
    let auth = require_auth(auth_user)?;

    let Ok(change_id) = ChangeId::parse(&change_id) else {
        return Ok(Json(ChangeOutcome::declined()));
    };

    if let Some(target) = actions::change_target(change_id, &state.deps).await {
        auth.actor()
            .can(Capability::ResolveChange { target })
            .check()?;
    }

    let outcome = actions::decline_change(change_id, &state.deps).await?;
    Ok(Json(outcome))
}

fn outcome_status(outcome: &ChangeOutcome) -> StatusCode {
    if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    }
}
