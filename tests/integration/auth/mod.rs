//! Auth validator integration tests
//!
//! Covers the fixed-order header checks and the token verification outcomes
//! on a protected route.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use easel_auth::{FINGERPRINT_HEADER, TOKEN_HEADER};
use easel_todos::{TodoFilter, TodoRepository};
use serde_json::json;

use crate::common::{body_json, TestApp, TEST_FINGERPRINT, VALID_TOKEN};

fn create_request(headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/todos")
        .header(header::CONTENT_TYPE, "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder
        .body(Body::from(json!({"content": "secret"}).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_missing_fingerprint_is_401_without_token_check() {
    let app = TestApp::new();

    let response = app.send(create_request(&[(TOKEN_HEADER, VALID_TOKEN)])).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.tokens.calls(), 0);

    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "MISSING_FINGERPRINT");
}

#[tokio::test]
async fn test_missing_token_is_401_without_token_check() {
    let app = TestApp::new();

    let response = app
        .send(create_request(&[(FINGERPRINT_HEADER, TEST_FINGERPRINT)]))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.tokens.calls(), 0);

    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "MISSING_TOKEN");
}

#[tokio::test]
async fn test_unknown_token_is_rejected_and_handler_never_runs() {
    let app = TestApp::new();

    let response = app
        .send(create_request(&[
            (FINGERPRINT_HEADER, TEST_FINGERPRINT),
            (TOKEN_HEADER, "not-a-real-token"),
        ]))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.tokens.calls(), 1);

    // The handler never ran, so nothing was written
    let stored = app.repo.find(&TodoFilter::default()).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_auth_service_outage_is_500_and_never_admits() {
    let app = TestApp::with_auth_outage();

    let response = app
        .send(create_request(&[
            (FINGERPRINT_HEADER, TEST_FINGERPRINT),
            (TOKEN_HEADER, VALID_TOKEN),
        ]))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let stored = app.repo.find(&TodoFilter::default()).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_valid_credentials_admit_the_request() {
    let app = TestApp::new();

    let response = app
        .send(create_request(&[
            (FINGERPRINT_HEADER, TEST_FINGERPRINT),
            (TOKEN_HEADER, VALID_TOKEN),
        ]))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.tokens.calls(), 1);
}
