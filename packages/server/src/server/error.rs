//! Mapping of domain and authorization failures onto HTTP responses.
//!
//! Every error body has the shape `{ "message": "..." }`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::common::{AuthError, Id};
use crate::domains::directory::DirectoryError;

#[derive(Debug)]
pub enum ApiError {
    Directory(DirectoryError),
    Auth(AuthError),
    /// Body or path the extractors could not decode.
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Directory(e) => match e {
                DirectoryError::DuplicateEmail
                | DirectoryError::InvalidCredentials
                | DirectoryError::InvalidPhone
                | DirectoryError::Validation(_) => StatusCode::BAD_REQUEST,
                DirectoryError::UserNotFound
                | DirectoryError::ChangeNotFound
                | DirectoryError::MessageNotFound
                | DirectoryError::AnnouncementNotFound => StatusCode::NOT_FOUND,
                DirectoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Auth(e) => match e {
                AuthError::AuthenticationRequired | AuthError::InvalidToken => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::AdminRequired | AuthError::PermissionDenied(_) => {
                    StatusCode::FORBIDDEN
                }
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        ApiError::Directory(e)
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Auth(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// `Json` whose rejections render as `{ "message" }` like every other error.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Path ids are opaque strings to callers; one that is not a valid id names
/// nothing, so it fails with the resource's not-found error.
pub fn parse_id<T>(raw: &str, not_found: DirectoryError) -> Result<Id<T>, ApiError> {
    Id::parse(raw).map_err(|_| ApiError::Directory(not_found))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            // Storage details stay in the logs
            ApiError::Directory(DirectoryError::Storage(e)) => {
                error!(error = ?e, "Request failed");
                "Internal server error".to_string()
            }
            ApiError::Directory(e) => e.to_string(),
            ApiError::Auth(e) => e.to_string(),
            ApiError::BadRequest(message) => message.clone(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(DirectoryError::InvalidPhone), StatusCode::BAD_REQUEST),
            (ApiError::from(DirectoryError::DuplicateEmail), StatusCode::BAD_REQUEST),
            (ApiError::from(DirectoryError::UserNotFound), StatusCode::NOT_FOUND),
            (
                ApiError::from(DirectoryError::Storage(anyhow::anyhow!("disk full"))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApiError::from(AuthError::AuthenticationRequired), StatusCode::UNAUTHORIZED),
            (ApiError::from(AuthError::AdminRequired), StatusCode::FORBIDDEN),
            (ApiError::BadRequest("bad body".to_string()), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "{error:?}");
        }
    }

    #[tokio::test]
    async fn test_storage_detail_is_not_exposed() {
        let response =
            ApiError::from(DirectoryError::Storage(anyhow::anyhow!("disk full"))).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["message"], "Internal server error");
    }

    #[test]
    fn test_unparseable_id_maps_to_not_found() {
        let err = parse_id::<()>("12345", DirectoryError::UserNotFound).unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(matches!(err, ApiError::Directory(DirectoryError::UserNotFound)));
    }

    #[test]
    fn test_parse_id_accepts_uuid() {
        let id = Id::<()>::new();
        assert_eq!(parse_id::<()>(&id.to_string(), DirectoryError::UserNotFound).unwrap(), id);
    }
}
