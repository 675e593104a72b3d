//! Auth domain actions - business logic functions
//!
//! Actions are async functions called directly from the HTTP handlers.

mod create_member;
mod login;
mod logout;
mod register;
mod reset_password;
mod seed_admin;
mod skip_verification;

pub use create_member::{create_member, DEFAULT_MEMBER_PASSWORD};
pub use login::login;
pub use logout::logout;
pub use register::register;
pub use reset_password::{reset_password, PasswordReset};
pub use seed_admin::{ensure_admin, ADMIN_MEMBER_ID};
pub use skip_verification::skip_verification;
