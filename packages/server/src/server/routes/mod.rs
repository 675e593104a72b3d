// HTTP routes
pub mod announcements;
pub mod auth;
pub mod changes;
pub mod health;
pub mod messages;
pub mod users;

pub use health::*;
