//! Member domain - the User record, its boundary representation and the
//! deterministic member identifier.

pub mod data;
pub mod member_id;
pub mod models;
pub mod validation;

pub use data::UserData;
pub use member_id::generate_member_id;
pub use models::{ContactUpdates, EmailVerification, Profile, Role, User};
pub use validation::validate_phone;
