mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::create_test_pool().await;
    common::create_test_url(&pool, "redirect1", "https://example.com/target").await;
    let server = common::create_test_server(pool);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_keeps_query_string() {
    let pool = common::create_test_pool().await;
    common::create_test_url(&pool, "q", "https://example.com/search?q=rust&page=2").await;
    let server = common::create_test_server(pool);

    let response = server.get("/q").await;

    assert_eq!(
        response.header("location"),
        "https://example.com/search?q=rust&page=2"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool);

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "status": "Error", "error": "url not found" }));
}

#[tokio::test]
async fn test_redirect_stored_url_with_control_character() {
    let pool = common::create_test_pool().await;
    common::create_test_url(&pool, "legacy", "https://example.com/a\nb").await;
    let server = common::create_test_server(pool);

    let response = server.get("/legacy").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/ab");
}
