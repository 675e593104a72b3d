//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::ServerDeps;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{announcements, auth, changes, health_handler, messages, users};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, allowed_origins: Vec<String>) -> Router {
    let jwt_service = deps.jwt_service.clone();
    let app_state = AxumAppState {
        deps: Arc::new(deps),
    };

    let cors = CorsLayer::new()
        .allow_origin(cors_origins(&allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        // Accounts
        .route("/api/register", post(auth::register_handler))
        .route("/api/login", post(auth::login_handler))
        .route("/api/logout", post(auth::logout_handler))
        .route("/api/password-reset", post(auth::password_reset_handler))
        .route("/api/verify-email/skip", post(auth::skip_verification_handler))
        // Directory
        .route(
            "/api/members",
            get(users::list_members_handler).post(users::create_member_handler),
        )
        .route(
            "/api/users/:id",
            get(users::get_user_handler).delete(users::delete_user_handler),
        )
        .route("/api/users/:id/changes", post(changes::propose_change_handler))
        // Change approval
        .route("/api/pending-changes", get(changes::list_changes_handler))
        .route(
            "/api/pending-changes/:id/accept",
            post(changes::accept_change_handler),
        )
        .route(
            "/api/pending-changes/:id/decline",
            post(changes::decline_change_handler),
        )
        // Messaging
        .route(
            "/api/messages",
            get(messages::list_messages_handler).post(messages::send_message_handler),
        )
        .route("/api/messages/:id/reply", post(messages::reply_handler))
        .route("/api/messages/:id/read", post(messages::mark_read_handler))
        .route("/api/messages/:id", delete(messages::delete_message_handler))
        // Announcements
        .route(
            "/api/announcements",
            get(announcements::list_announcements_handler)
                .post(announcements::create_announcement_handler),
        )
        .route(
            "/api/announcements/:id",
            delete(announcements::delete_announcement_handler),
        )
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// `*` opens CORS to any origin; otherwise only the listed origins are allowed.
fn cors_origins(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.iter().any(|o| o == "*") {
        return Any.into();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}
