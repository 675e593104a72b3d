pub mod user;

pub use user::{ContactUpdates, EmailVerification, Profile, Role, User};
