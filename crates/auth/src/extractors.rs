//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::error::AuthError;

/// Device fingerprint header set by the frontend
pub const FINGERPRINT_HEADER: &str = "x-nb-fingerprint";

/// Token header verified against the auth service
pub const TOKEN_HEADER: &str = "x-nb-token";

/// Authenticated user extractor.
///
/// Checks run in fixed order, each terminal on failure:
/// 1. fingerprint header present, else 401
/// 2. token header present, else 401 (the auth service is not called)
/// 3. token verified against the auth service
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let fingerprint = parts
            .headers
            .get(FINGERPRINT_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingFingerprint)?;

        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let backend = AuthBackend::from_ref(state);
        let auth_context = backend.authenticate(token, fingerprint).await?;

        Ok(AuthUser(auth_context))
    }
}
