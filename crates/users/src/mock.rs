//! Mock user directory for testing

use std::collections::HashMap;

use serde_json::Value;

use crate::{ForwardedAuth, UserDirectory, UserDirectoryError};

/// Mock user directory serving canned records
#[derive(Debug, Default)]
pub struct MockUserDirectory {
    users: HashMap<String, Value>,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned user record
    pub fn with_user(mut self, id: impl Into<String>, record: Value) -> Self {
        self.users.insert(id.into(), record);
        self
    }
}

#[async_trait::async_trait]
impl UserDirectory for MockUserDirectory {
    async fn fetch_user(
        &self,
        id: &str,
        _auth: &ForwardedAuth,
    ) -> Result<Value, UserDirectoryError> {
        self.users.get(id).cloned().ok_or_else(|| {
            UserDirectoryError::Response(format!("User service returned 404: no user {}", id))
        })
    }
}
