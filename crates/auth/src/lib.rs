//! Authentication middleware for the Easel API
//!
//! Implements the pre-handler auth check: every protected route requires a
//! device fingerprint header and a token header, and the token is verified
//! against the auth service before the handler runs. Provides an axum
//! extractor that works with any state implementing `FromRef<S>` for
//! `AuthBackend`.

mod backend;
mod config;
mod context;
mod error;
mod extractors;
mod mock;
mod service;

pub use backend::AuthBackend;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::{AuthUser, FINGERPRINT_HEADER, TOKEN_HEADER};
pub use mock::MockTokenService;
pub use service::{CheckTokenResponse, HttpTokenService, TokenService, TokenServiceError};
