//! Auth backend
//!
//! Holds the token-service handle and turns verification results into an
//! admit/reject decision. The backend is request-scoped in effect: it keeps
//! no per-request state and communicates only through return values.

use std::sync::Arc;

use crate::context::AuthContext;
use crate::error::AuthError;
use crate::service::TokenService;

/// Authentication backend shared through application state
#[derive(Clone)]
pub struct AuthBackend {
    service: Arc<dyn TokenService>,
}

impl AuthBackend {
    pub fn new(service: Arc<dyn TokenService>) -> Self {
        Self { service }
    }

    /// Verify a token/fingerprint pair and resolve the owning user.
    ///
    /// A transport or decode failure is an auth-service fault, not a client
    /// error: it surfaces as `ServiceUnavailable` and never admits the
    /// request.
    pub async fn authenticate(
        &self,
        token: &str,
        fingerprint: &str,
    ) -> Result<AuthContext, AuthError> {
        let result = self
            .service
            .check_token(token, fingerprint)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Token verification call failed");
                AuthError::ServiceUnavailable
            })?;

        match result.user_id {
            Some(user_id) if !user_id.is_empty() => Ok(AuthContext { user_id }),
            _ => Err(AuthError::UserNotFound),
        }
    }
}
