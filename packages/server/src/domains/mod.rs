// Business domains
pub mod announcements;
pub mod auth;
pub mod change_approval;
pub mod directory;
pub mod member;
pub mod messaging;
