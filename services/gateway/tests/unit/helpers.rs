//! Test helpers and utilities

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use std::time::Instant;
use tower::ServiceExt;

use trade_gateway::{GatewayConfig, build_router};

use crate::{create_test_gateway_config, init_test_env};

/// Multipart boundary used by every hand-built upload body
pub const BOUNDARY: &str = "----trade-gateway-test-boundary";

/// Maximum response body read by the helpers
const BODY_LIMIT: usize = 4 * 1024 * 1024;

/// Router with the default test configuration
pub fn test_router() -> Router {
    router_with(create_test_gateway_config())
}

/// Router for a custom configuration
pub fn router_with(config: GatewayConfig) -> Router {
    init_test_env();
    build_router(&config, Instant::now())
}

/// Send a single request through a router
pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    match router.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    }
}

/// Read a response body as JSON
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("JSON response body")
}

/// Read a response body as text
pub async fn text_body(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("response body");
    String::from_utf8(bytes.to_vec()).expect("UTF-8 response body")
}

/// POST a JSON payload
pub fn json_request(uri: &str, payload: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

/// One part of a multipart form
pub struct FormPart<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content: &'a [u8],
}

impl<'a> FormPart<'a> {
    pub const fn file(name: &'a str, file_name: &'a str, content: &'a [u8]) -> Self {
        Self {
            name,
            file_name: Some(file_name),
            content,
        }
    }

    pub const fn text(name: &'a str, content: &'a [u8]) -> Self {
        Self {
            name,
            file_name: None,
            content,
        }
    }
}

/// Encode parts as a `multipart/form-data` body
pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        part.name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: text/csv\r\n");
            }
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name).as_bytes(),
            ),
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a multipart form to the upload endpoint
pub fn upload_request(parts: &[FormPart<'_>]) -> Request<Body> {
    Request::post("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .expect("request")
}

/// Upload `csv` as the `file` field
pub fn csv_upload(csv: &str) -> Request<Body> {
    upload_request(&[FormPart::file("file", "trades.csv", csv.as_bytes())])
}

/// All `Set-Cookie` header values of a response
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect()
}
