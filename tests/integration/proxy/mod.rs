//! Passthrough surface integration tests

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_ping_reports_service_info() {
    let app = TestApp::new();

    let response = app.get("/ping").await;
    assert_eq!(response.status(), StatusCode::OK);

    let info = body_json(response).await;
    assert_eq!(info["name"], "easel");
    assert!(info["version"].as_str().is_some());
}

#[tokio::test]
async fn test_user_record_is_proxied_verbatim() {
    let app = TestApp::new();

    let response = app.get("/users/u-1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let record = body_json(response).await;
    assert_eq!(record["name"], "Maya");
    assert_eq!(record["email"], "maya@example.com");
}

#[tokio::test]
async fn test_unknown_user_is_upstream_error() {
    let app = TestApp::new();

    let response = app.get("/users/ghost").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_artwork_listing_is_passed_through() {
    let app = TestApp::new();

    let response = app.get("/artwork").await;
    assert_eq!(response.status(), StatusCode::OK);

    let listing = body_json(response).await;
    assert_eq!(listing["data"].as_array().unwrap().len(), 1);
    assert_eq!(listing["data"][0]["title"], "Nighthawks");
}

#[tokio::test]
async fn test_single_artwork_derives_image_urls() {
    let app = TestApp::new();

    let response = app.get("/artwork/75644").await;
    assert_eq!(response.status(), StatusCode::OK);

    let artwork = body_json(response).await;
    assert_eq!(artwork["id"], 75644);
    assert_eq!(artwork["title"], "Nighthawks");
    assert_eq!(
        artwork["images"]["full"],
        "https://www.artic.edu/iiif/2/831a05de-d3f6-f4fa-a460-23008dd58dda/full/848,/0/default.jpg"
    );
    assert_eq!(
        artwork["images"]["small"],
        "https://www.artic.edu/iiif/2/831a05de-d3f6-f4fa-a460-23008dd58dda/full/150,/0/default.jpg"
    );
}

#[tokio::test]
async fn test_unknown_artwork_is_upstream_error() {
    let app = TestApp::new();

    let response = app.get("/artwork/999999").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
