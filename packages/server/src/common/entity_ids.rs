//! Typed ID definitions for the directory's entities.
//!
//! ```rust
//! use directory_core::common::{ChangeId, UserId};
//!
//! let user_id = UserId::new();
//! let change_id = ChangeId::new();
//! // let wrong: ChangeId = user_id; // compile error
//! # let _ = (user_id, change_id);
//! ```

pub use super::id::Id;

/// Marker type for User entities (members and the administrator).
pub struct User;

/// Marker type for Message entities (member → admin thread).
pub struct Message;

/// Marker type for Announcement entities.
pub struct Announcement;

/// Marker type for PendingChange entities.
pub struct PendingChange;

pub type UserId = Id<User>;

pub type MessageId = Id<Message>;

pub type AnnouncementId = Id<Announcement>;

pub type ChangeId = Id<PendingChange>;
