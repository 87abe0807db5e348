//! Health check handler

use axum::{extract::State, response::Json};
use std::time::Instant;
use tracing::debug;

use crate::models::HealthCheckResponse;

/// Health check handlers
#[derive(Clone)]
pub struct HealthHandlers {
    start_time: Instant,
}

impl HealthHandlers {
    pub const fn new(start_time: Instant) -> Self {
        Self { start_time }
    }

    /// Health check endpoint
    pub async fn health_check(State(handlers): State<Self>) -> Json<HealthCheckResponse> {
        debug!("Health check request");

        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: handlers.start_time.elapsed().as_secs(),
        })
    }
}
