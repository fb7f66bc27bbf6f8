//! User-service proxy handler

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use easel_auth::{FINGERPRINT_HEADER, TOKEN_HEADER};
use easel_common::{Error, Result};
use easel_users::ForwardedAuth;
use serde_json::Value;

use crate::middleware::ApiState;

fn forwarded_auth(headers: &HeaderMap) -> ForwardedAuth {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    ForwardedAuth {
        fingerprint: header_value(FINGERPRINT_HEADER),
        token: header_value(TOKEN_HEADER),
    }
}

/// Proxy a user record from the user service
///
/// **GET /users/{id}**
///
/// The caller's auth headers are forwarded so the user service can apply its
/// own access rules; the record is passed through verbatim.
pub async fn get_user(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let user = state
        .users
        .fetch_user(&id, &forwarded_auth(&headers))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "User service call failed");
            Error::Upstream(e.to_string())
        })?;

    tracing::info!(user_id = %id, "User record proxied");
    Ok(Json(user))
}
