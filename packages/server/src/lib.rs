// Next4Us Member Directory - API Core
//
// This crate provides the backend for the member directory: registration and
// login, the admin/member message thread, targeted announcements, and the
// two-party approval workflow for changes to a member's contact details.
//
// Business logic lives in domains/*; infrastructure seams in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
