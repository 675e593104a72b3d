//! Directory domain - the authoritative store of users, messages,
//! announcements and pending changes.

pub mod errors;
pub mod snapshot;
pub mod state;
pub mod store;

pub use errors::{DirectoryError, DirectoryResult};
pub use snapshot::DirectorySnapshot;
pub use state::DirectoryState;
pub use store::Directory;
