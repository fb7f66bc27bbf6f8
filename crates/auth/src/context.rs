//! Per-request authentication context

/// Identity resolved from a verified token.
///
/// Built once per request from the `(fingerprint, token)` header pair and
/// never persisted or cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// User id reported by the auth service for the verified token
    pub user_id: String,
}
