//! Change Approval - administrator-proposed, member-resolved edits to a
//! user's email, phone and member id.
//!
//! Components:
//! - models: PendingChange, ChangeStatus, ChangeOutcome
//! - workflow: the pending → accepted | declined transitions
//! - actions: persisted and logged entry points used by the HTTP layer

pub mod actions;
pub mod models;
pub mod workflow;

pub use models::{ChangeOutcome, ChangeStatus, PendingChange};
