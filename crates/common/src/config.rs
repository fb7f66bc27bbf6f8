//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Values with a sensible
//! local-development default fall back to it; `DATABASE_URL` is required
//! and startup fails fast without it.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Canonical listen port when `PORT` is unset
const DEFAULT_PORT: u16 = 8080;

/// Upstream request timeout when `UPSTREAM_TIMEOUT_SECS` is unset.
/// The upstream services impose none of their own, so every outbound
/// call goes through this knob.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Base URL of the user service
    pub user_endpoint: String,

    /// Base URL of the auth service (`/check_token`)
    pub auth_endpoint: String,

    /// Base URL of the public art-catalog API
    pub catalog_endpoint: String,

    /// Timeout applied to every outbound HTTP call, in seconds
    pub upstream_timeout_secs: u64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            user_endpoint: env::var("USER_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            auth_endpoint: env::var("AUTH_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            catalog_endpoint: env::var("CATALOG_ENDPOINT")
                .unwrap_or_else(|_| "https://api.artic.edu/api/v1".to_string()),

            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "easel=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
        };

        Ok(config)
    }

    /// Timeout for outbound HTTP calls as a `Duration`
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
