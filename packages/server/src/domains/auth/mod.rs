//! Auth domain - registration, credential checks and account recovery
//!
//! Responsibilities:
//! - Phone validation and password hashing on registration
//! - Login with a uniform failure for unknown email or wrong password, and logout
//! - Password reset by email + phone, email verification skip
//! - Session token management (JWT)

pub mod actions;
pub mod jwt;
pub mod models;

pub use actions::*;
pub use jwt::{Claims, JwtService};
pub use models::LoginOutcome;
