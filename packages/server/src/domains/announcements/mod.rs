//! Announcements domain - admin broadcasts and their audience targeting.

pub mod actions;
pub mod models;
pub mod targeting;

pub use models::{Announcement, NewAnnouncement, TargetAudience};
pub use targeting::visible_to;
