//! Todo CRUD integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_todo_lifecycle_create_get_delete() {
    let app = TestApp::new();

    // Create
    let response = app
        .authed_json(Method::POST, "/todos", json!({"content": "buy milk"}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["content"], "buy milk");
    let id = created["id"].as_str().expect("created todo has an id").to_string();

    // Read back
    let response = app.get(&format!("/todos/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["content"], "buy milk");
    assert_eq!(fetched["id"], id.as_str());

    // Delete
    let response = app.authed(Method::DELETE, &format!("/todos/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"deleted": true}));

    // Deleting again reports nothing removed, still 200
    let response = app.authed(Method::DELETE, &format!("/todos/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"deleted": false}));
}

#[tokio::test]
async fn test_update_replaces_content_and_keeps_identity() {
    let app = TestApp::new();

    let created = body_json(
        app.authed_json(Method::POST, "/todos", json!({"content": "before"}))
            .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .authed_json(
            Method::PATCH,
            &format!("/todos/{}", id),
            json!({"content": "x"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["content"], "x");
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_list_returns_created_todos() {
    let app = TestApp::new();

    for content in ["one", "two", "three"] {
        let response = app
            .authed_json(Method::POST, "/todos", json!({"content": content}))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.get("/todos").await;
    assert_eq!(response.status(), StatusCode::OK);

    let listing = body_json(response).await;
    assert_eq!(listing.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_unknown_todo_is_404() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/todos/{}", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_with_wrong_content_type_is_400() {
    let app = TestApp::new();

    let response = app
        .authed_json(Method::POST, "/todos", json!({"content": 42}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_empty_content_is_400_and_stores_nothing() {
    let app = TestApp::new();

    let response = app
        .authed_json(Method::POST, "/todos", json!({"content": ""}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let listing = body_json(app.get("/todos").await).await;
    assert!(listing.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_patch_unknown_todo_is_404() {
    let app = TestApp::new();

    let response = app
        .authed_json(
            Method::PATCH,
            &format!("/todos/{}", uuid::Uuid::new_v4()),
            json!({"content": "x"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
