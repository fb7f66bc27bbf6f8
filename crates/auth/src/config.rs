//! Auth service client configuration

use std::time::Duration;

/// Configuration for the auth-service client
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the auth service
    pub auth_endpoint: String,
    /// Request timeout for token verification calls
    pub timeout: Duration,
}

impl AuthConfig {
    pub fn new(auth_endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            auth_endpoint: auth_endpoint.into(),
            timeout,
        }
    }
}
