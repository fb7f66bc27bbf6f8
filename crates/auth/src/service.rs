//! Token verification client
//!
//! Thin stateless wrapper around the auth service's `/check_token` endpoint:
//! one outbound POST per call, JSON response, no retry, no caching.

use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;

/// Errors from the token verification call
#[derive(Debug, thiserror::Error)]
pub enum TokenServiceError {
    #[error("Token service configuration error: {0}")]
    Configuration(String),

    #[error("Token service request error: {0}")]
    Request(String),

    #[error("Token service response error: {0}")]
    Response(String),
}

/// Request body for `POST /check_token`
#[derive(Debug, Serialize)]
struct CheckTokenRequest<'a> {
    token: &'a str,
    fingerprint: &'a str,
}

/// Response body from `POST /check_token`
///
/// The auth service reports the owning user of a valid token; an absent or
/// empty `userId` means the token resolved to no user.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckTokenResponse {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Token verification seam
///
/// Implemented by the real HTTP client and by `MockTokenService` for tests.
#[async_trait::async_trait]
pub trait TokenService: Send + Sync {
    /// Verify a token/fingerprint pair against the auth service
    async fn check_token(
        &self,
        token: &str,
        fingerprint: &str,
    ) -> Result<CheckTokenResponse, TokenServiceError>;
}

/// Real HTTP client for the auth service
pub struct HttpTokenService {
    http: reqwest::Client,
    check_url: String,
}

impl HttpTokenService {
    /// Create a new client from configuration.
    pub fn new(config: AuthConfig) -> Result<Self, TokenServiceError> {
        let check_url = format!("{}/check_token", config.auth_endpoint.trim_end_matches('/'));
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TokenServiceError::Configuration(e.to_string()))?;
        Ok(Self { http, check_url })
    }
}

#[async_trait::async_trait]
impl TokenService for HttpTokenService {
    async fn check_token(
        &self,
        token: &str,
        fingerprint: &str,
    ) -> Result<CheckTokenResponse, TokenServiceError> {
        let response = self
            .http
            .post(&self.check_url)
            .json(&CheckTokenRequest { token, fingerprint })
            .send()
            .await
            .map_err(|e| TokenServiceError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(TokenServiceError::Response(format!(
                "Auth service returned {}: {}",
                status, body
            )));
        }

        let parsed = response
            .json::<CheckTokenResponse>()
            .await
            .map_err(|e| TokenServiceError::Response(e.to_string()))?;

        tracing::debug!("Token verified against auth service");
        Ok(parsed)
    }
}
