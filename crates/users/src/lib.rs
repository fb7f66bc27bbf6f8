//! Easel user-service client
//!
//! Read-through access to the platform user service:
//! - Real HTTP client for deployments
//! - Mock directory for testing and development
//!
//! One outbound request per call, JSON response, no retry and no caching.
//! The caller's auth headers are forwarded so the user service can apply its
//! own access rules.

pub mod client;
pub mod mock;

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserDirectoryError {
    #[error("User service configuration error: {0}")]
    Configuration(String),

    #[error("User service request error: {0}")]
    Request(String),

    #[error("User service response error: {0}")]
    Response(String),
}

/// Auth headers forwarded from the inbound request, when present
#[derive(Debug, Clone, Default)]
pub struct ForwardedAuth {
    pub fingerprint: Option<String>,
    pub token: Option<String>,
}

/// User service configuration
#[derive(Debug, Clone)]
pub struct UserDirectoryConfig {
    /// Base URL of the user service
    pub base_url: String,
    /// Request timeout for user lookups
    pub timeout: Duration,
}

/// User directory seam for different backends
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user record by id; the body is passed through verbatim.
    async fn fetch_user(&self, id: &str, auth: &ForwardedAuth)
        -> Result<Value, UserDirectoryError>;
}
