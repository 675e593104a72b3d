//! Authorization for directory operations
//!
//! The change-approval workflow and the other domain operations do not check
//! who is calling. Callers run the check first:
//!
//! ```rust
//! use directory_core::common::{Actor, Capability, UserId};
//!
//! let member = UserId::new();
//! Actor::new(member, false)
//!     .can(Capability::ResolveChange { target: member })
//!     .check()
//!     .unwrap();
//! ```

mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder};
pub use capability::Capability;
pub use errors::AuthError;
