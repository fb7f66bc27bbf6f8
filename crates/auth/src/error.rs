//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
///
/// Each check in the validator chain is terminal on failure: the first
/// rejection becomes the response and the handler never runs.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// `x-nb-fingerprint` header missing
    MissingFingerprint,
    /// `x-nb-token` header missing
    MissingToken,
    /// Token verified but resolved to no user
    UserNotFound,
    /// Auth service unreachable or returned garbage; never admits the request
    ServiceUnavailable,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingFingerprint => (
                StatusCode::UNAUTHORIZED,
                "MISSING_FINGERPRINT",
                "x-nb-fingerprint header required",
            ),
            AuthError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "MISSING_TOKEN",
                "x-nb-token header required",
            ),
            AuthError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                "No user found for that token",
            ),
            AuthError::ServiceUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AUTH_UNAVAILABLE",
                "Token verification failed",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
