//! Change-approval state machine.
//!
//! ```text
//! propose ──► pending ──accept──► accepted (updates applied, entry removed)
//!                    └─decline──► declined (entry removed, user untouched)
//! ```
//!
//! No principal checks happen here; see `common::auth` for who may call what.
//! Several proposals for the same user may be pending at once.

use chrono::{DateTime, Utc};

use crate::common::{ChangeId, UserId};
use crate::domains::change_approval::{ChangeOutcome, ChangeStatus, PendingChange};
use crate::domains::directory::{
    DirectoryError, DirectoryResult, DirectorySnapshot, DirectoryState,
};
use crate::domains::member::{validate_phone, ContactUpdates};

/// Record a pending proposal against an existing user.
///
/// The caller sends only the fields it wants changed; no diffing happens here.
pub fn propose(
    state: &mut DirectoryState,
    user_id: UserId,
    updates: ContactUpdates,
    now: DateTime<Utc>,
) -> DirectoryResult<PendingChange> {
    validate_updates(state, user_id, &updates)?;

    let change = PendingChange {
        id: ChangeId::new(),
        user_id,
        updates,
        status: ChangeStatus::Pending,
        created_at: now,
    };
    state.pending_changes.push(change.clone());
    Ok(change)
}

/// Apply a pending change to its user and drop it from the pending set.
///
/// When the embedded session belongs to the same user its cached copy is
/// refreshed too.
pub fn accept(snapshot: &mut DirectorySnapshot, change_id: ChangeId) -> DirectoryResult<PendingChange> {
    let state = &mut snapshot.state;
    let index = state
        .pending_changes
        .iter()
        .position(|c| c.id == change_id)
        .ok_or(DirectoryError::ChangeNotFound)?;
    let change = state.pending_changes[index].clone();

    if let Some(email) = &change.updates.email {
        if state.email_taken(email, change.user_id) {
            return Err(DirectoryError::DuplicateEmail);
        }
    }

    let user = state
        .find_user_mut(change.user_id)
        .ok_or(DirectoryError::UserNotFound)?;
    user.apply(&change.updates);
    let refreshed = user.clone();

    state.pending_changes.remove(index);

    if let Some(current) = snapshot.current_user.as_mut() {
        if current.id == refreshed.id {
            *current = refreshed;
        }
    }

    Ok(PendingChange {
        status: ChangeStatus::Accepted,
        ..change
    })
}

/// Drop a pending change without touching the user. Declining a change that
/// is already gone still succeeds; the return value says whether one was
/// removed.
pub fn decline(state: &mut DirectoryState, change_id: ChangeId) -> bool {
    let before = state.pending_changes.len();
    state.pending_changes.retain(|c| c.id != change_id);
    state.pending_changes.len() != before
}

/// Outcome for a failed accept, keeping infrastructure errors as errors.
pub fn accept_failure(err: DirectoryError) -> DirectoryResult<ChangeOutcome> {
    match err {
        DirectoryError::Storage(e) => Err(DirectoryError::Storage(e)),
        other => Ok(ChangeOutcome::failed(other.to_string())),
    }
}

pub fn changes_for(state: &DirectoryState, user_id: UserId) -> Vec<PendingChange> {
    state
        .pending_changes
        .iter()
        .filter(|c| c.user_id == user_id)
        .cloned()
        .collect()
}

fn validate_updates(
    state: &DirectoryState,
    user_id: UserId,
    updates: &ContactUpdates,
) -> DirectoryResult<()> {
    if updates.is_empty() {
        return Err(DirectoryError::validation(
            "At least one of email, phone or memberId must be changed",
        ));
    }

    if state.find_user(user_id).is_none() {
        return Err(DirectoryError::UserNotFound);
    }

    if let Some(email) = &updates.email {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(DirectoryError::validation("Email address is not valid"));
        }
        if state.email_taken(email, user_id) {
            return Err(DirectoryError::DuplicateEmail);
        }
    }

    if let Some(phone) = &updates.phone {
        validate_phone(phone)?;
    }

    if let Some(member_id) = &updates.member_id {
        if member_id.trim().is_empty() {
            return Err(DirectoryError::validation("Member ID cannot be empty"));
        }
    }

    Ok(())
}
