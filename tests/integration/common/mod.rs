//! Shared test harness for the integration suite

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use easel_app::{create_app, AppServices};
use easel_auth::{MockTokenService, FINGERPRINT_HEADER, TOKEN_HEADER};
use easel_catalog::{ArtworkFields, MockArtCatalog};
use easel_todos::InMemoryTodoRepository;
use easel_users::mock::MockUserDirectory;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Token the mock auth service recognizes
pub const VALID_TOKEN: &str = "valid-token";

/// User id the valid token resolves to
pub const TEST_USER_ID: &str = "user-1";

/// Fingerprint used by test requests
pub const TEST_FINGERPRINT: &str = "device-1";

/// Fully composed application over in-memory fixtures
pub struct TestApp {
    router: Router,
    pub tokens: Arc<MockTokenService>,
    pub repo: Arc<InMemoryTodoRepository>,
}

impl TestApp {
    /// Build the app with the default fixtures: one known token, one user
    /// record, one catalog artwork.
    pub fn new() -> Self {
        Self::with_tokens(MockTokenService::new().with_token(VALID_TOKEN, TEST_USER_ID))
    }

    /// Build the app with a failing auth service
    pub fn with_auth_outage() -> Self {
        Self::with_tokens(MockTokenService::failing())
    }

    fn with_tokens(tokens: MockTokenService) -> Self {
        let tokens = Arc::new(tokens);
        let repo = Arc::new(InMemoryTodoRepository::new());

        let users = MockUserDirectory::new().with_user(
            "u-1",
            json!({"id": "u-1", "name": "Maya", "email": "maya@example.com"}),
        );
        let catalog = MockArtCatalog::new().with_artwork(ArtworkFields {
            id: 75644,
            title: "Nighthawks".to_string(),
            image_id: "831a05de-d3f6-f4fa-a460-23008dd58dda".to_string(),
        });

        let router = create_app(AppServices {
            todos: repo.clone(),
            tokens: tokens.clone(),
            users: Arc::new(users),
            catalog: Arc::new(catalog),
        });

        Self {
            router,
            tokens,
            repo,
        }
    }

    /// Send a request through the composed router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Unauthenticated request with no body
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Authenticated JSON request using the default token/fingerprint pair
    pub async fn authed_json(&self, method: Method, uri: &str, body: Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(FINGERPRINT_HEADER, TEST_FINGERPRINT)
                .header(TOKEN_HEADER, VALID_TOKEN)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Authenticated request with no body
    pub async fn authed(&self, method: Method, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(FINGERPRINT_HEADER, TEST_FINGERPRINT)
                .header(TOKEN_HEADER, VALID_TOKEN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
