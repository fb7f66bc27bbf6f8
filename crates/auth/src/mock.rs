//! Mock token service
//!
//! Programmable token→user map for tests and local development. Records how
//! many verification calls were made so tests can assert that header
//! rejections short-circuit before any network call.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::service::{CheckTokenResponse, TokenService, TokenServiceError};

/// Mock token service for testing
#[derive(Debug, Default)]
pub struct MockTokenService {
    users: HashMap<String, String>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockTokenService {
    /// Create a mock that recognizes no tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token as belonging to a user
    pub fn with_token(mut self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.users.insert(token.into(), user_id.into());
        self
    }

    /// Create a mock that fails every call, simulating an auth-service outage
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of verification calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TokenService for MockTokenService {
    async fn check_token(
        &self,
        token: &str,
        _fingerprint: &str,
    ) -> Result<CheckTokenResponse, TokenServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(TokenServiceError::Request(
                "auth service unreachable".to_string(),
            ));
        }

        Ok(CheckTokenResponse {
            user_id: self.users.get(token).cloned(),
        })
    }
}
