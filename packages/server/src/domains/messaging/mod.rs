//! Messaging domain - a member's thread with the administrator, with at most
//! one (replaceable) admin reply per message.

pub mod actions;
pub mod channel;
pub mod data;
pub mod models;

pub use data::MessageData;
pub use models::Message;
