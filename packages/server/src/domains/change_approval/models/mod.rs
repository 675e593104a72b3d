pub mod pending_change;

pub use pending_change::{ChangeOutcome, ChangeStatus, PendingChange};
