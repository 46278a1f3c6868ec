//! End-to-end tests of the HTTP invocation surface without a database.
//!
//! The pool points at a socket that does not exist, so every invocation that
//! gets as far as acquiring a connection fails with a connection error.

mod helpers;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use helpers::unreachable_handler;
use inventory_images::create_router;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

#[tokio::test]
async fn test_unreachable_database_returns_error_body() {
    let handler = unreachable_handler();
    let app = create_router(handler.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .header("ce-id", "evt-42")
                .body(Body::from(r#"{"inventoryId": "sku-9"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.starts_with("Error:"), "unexpected body: {body}");

    // A failed acquire opens nothing
    assert_eq!(handler.pool().size(), 0);
}

#[tokio::test]
async fn test_get_with_empty_body_invokes_handler() {
    let handler = unreachable_handler();
    let app = create_router(handler.clone());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(handler.stats().invocations(), 1);
}

#[tokio::test]
async fn test_invalid_event_field_is_reported() {
    let app = create_router(unreachable_handler());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from(r#"{"description": 5}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.starts_with("Error: invalid event field `description`"));
}

#[tokio::test]
async fn test_status_reports_counters() {
    let handler = unreachable_handler();
    let app = create_router(handler.clone());

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    let response = app
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let status: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(status["invocations"], 2);
    assert_eq!(status["inserted"], 0);
    assert_eq!(status["errors"]["total"], 2);
    assert_eq!(status["errors"]["connection_error"], 2);
    assert_eq!(status["pool"]["open"], 0);
    assert_eq!(status["pool"]["max"], 7);
}
