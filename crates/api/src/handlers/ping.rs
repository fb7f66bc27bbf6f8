//! Service info handler

use axum::Json;
use serde::Serialize;

/// Service name reported by `/ping`
pub const SERVICE_NAME: &str = "easel";

/// Response for the liveness/info route
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub version: &'static str,
    pub name: &'static str,
}

/// Liveness and version info
///
/// **GET /ping**
///
/// The easy way to check the service is running and which build is deployed.
pub async fn ping() -> Json<PingResponse> {
    tracing::info!("Ping");

    Json(PingResponse {
        version: env!("CARGO_PKG_VERSION"),
        name: SERVICE_NAME,
    })
}
