//! Health endpoint tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use super::helpers::*;
use crate::create_test_gateway_config;

#[tokio::test]
async fn test_health_check() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let response = send(test_router(), request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_health_path_from_config() {
    let mut config = create_test_gateway_config();
    config.monitoring.health_path = "/status".to_string();

    let request = Request::get("/status").body(Body::empty()).unwrap();
    let response = send(router_with(config.clone()), request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::get("/health").body(Body::empty()).unwrap();
    let response = send(router_with(config), request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let request = Request::get("/api/upload").body(Body::empty()).unwrap();
    let response = send(test_router(), request).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
