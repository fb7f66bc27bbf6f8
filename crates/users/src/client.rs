//! User service HTTP client

use serde_json::Value;

use crate::{ForwardedAuth, UserDirectory, UserDirectoryConfig, UserDirectoryError};

const FINGERPRINT_HEADER: &str = "x-nb-fingerprint";
const TOKEN_HEADER: &str = "x-nb-token";

/// Real HTTP client for the platform user service
pub struct HttpUserDirectory {
    http: reqwest::Client,
    base_url: String,
}

impl HttpUserDirectory {
    /// Create a new client from configuration.
    pub fn new(config: UserDirectoryConfig) -> Result<Self, UserDirectoryError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UserDirectoryError::Configuration(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_user(
        &self,
        id: &str,
        auth: &ForwardedAuth,
    ) -> Result<Value, UserDirectoryError> {
        let url = format!("{}/users/{}", self.base_url, id);

        let mut request = self.http.get(&url);
        if let Some(fingerprint) = &auth.fingerprint {
            request = request.header(FINGERPRINT_HEADER, fingerprint);
        }
        if let Some(token) = &auth.token {
            request = request.header(TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UserDirectoryError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(UserDirectoryError::Response(format!(
                "User service returned {}: {}",
                status, body
            )));
        }

        let user = response
            .json::<Value>()
            .await
            .map_err(|e| UserDirectoryError::Response(e.to_string()))?;

        tracing::debug!(user_id = %id, "User record fetched");
        Ok(user)
    }
}
