//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container passed to every
//! domain action and HTTP handler.

use std::sync::Arc;

use crate::domains::auth::JwtService;
use crate::domains::directory::Directory;
use crate::kernel::BasePasswordHasher;

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub directory: Arc<Directory>,
    pub password_hasher: Arc<dyn BasePasswordHasher>,
    /// JWT service for session token creation
    pub jwt_service: Arc<JwtService>,
}

impl ServerDeps {
    pub fn new(
        directory: Arc<Directory>,
        password_hasher: Arc<dyn BasePasswordHasher>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            directory,
            password_hasher,
            jwt_service,
        }
    }
}
