// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod masking;

pub use auth::{Actor, AuthError, Capability};
pub use entity_ids::*;
pub use id::Id;
pub use masking::{mask_email, mask_phone};
