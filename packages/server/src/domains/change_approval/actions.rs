//! Change-approval actions
//!
//! Proposing is admin-only and resolving is for the targeted member; both are
//! checked by the caller with `Actor::can` before these run.

use chrono::Utc;
use tracing::{info, warn};

use crate::common::{ChangeId, UserId};
use crate::domains::change_approval::{workflow, ChangeOutcome, PendingChange};
use crate::domains::directory::DirectoryResult;
use crate::domains::member::ContactUpdates;
use crate::kernel::ServerDeps;

pub async fn propose_change(
    user_id: UserId,
    updates: ContactUpdates,
    deps: &ServerDeps,
) -> DirectoryResult<PendingChange> {
    let change = deps
        .directory
        .commit(|s| workflow::propose(&mut s.state, user_id, updates, Utc::now()))
        .await?;

    info!(
        change_id = %change.id,
        user_id = %user_id,
        email = change.updates.email.is_some(),
        phone = change.updates.phone.is_some(),
        member_id = change.updates.member_id.is_some(),
        "Change proposed"
    );
    Ok(change)
}

/// Accept a pending change. Lookup and validation failures come back as an
/// unsuccessful outcome; only storage failures are errors.
pub async fn accept_change(change_id: ChangeId, deps: &ServerDeps) -> DirectoryResult<ChangeOutcome> {
    match deps
        .directory
        .commit(|s| workflow::accept(s, change_id))
        .await
    {
        Ok(change) => {
            info!(change_id = %change_id, user_id = %change.user_id, "Change accepted");
            Ok(ChangeOutcome::accepted())
        }
        Err(e) => {
            warn!(change_id = %change_id, error = %e, "Change could not be accepted");
            workflow::accept_failure(e)
        }
    }
}

/// Decline a pending change. Always succeeds unless storage fails.
pub async fn decline_change(change_id: ChangeId, deps: &ServerDeps) -> DirectoryResult<ChangeOutcome> {
    let removed = deps
        .directory
        .commit(|s| Ok(workflow::decline(&mut s.state, change_id)))
        .await?;

    info!(change_id = %change_id, removed, "Change declined");
    Ok(ChangeOutcome::declined())
}

/// Find the user a pending change targets, for authorization.
pub async fn change_target(change_id: ChangeId, deps: &ServerDeps) -> Option<UserId> {
    deps.directory
        .read(|s| {
            s.state
                .pending_changes
                .iter()
                .find(|c| c.id == change_id)
                .map(|c| c.user_id)
        })
        .await
}

pub async fn changes_for(user_id: UserId, deps: &ServerDeps) -> Vec<PendingChange> {
    deps.directory
        .read(|s| workflow::changes_for(&s.state, user_id))
        .await
}

pub async fn list_pending_changes(deps: &ServerDeps) -> Vec<PendingChange> {
    deps.directory
        .read(|s| s.state.pending_changes.clone())
        .await
}
