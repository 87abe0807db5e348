//! REST API models and request/response types

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Login and registration payload
///
/// Both fields are optional at the wire level so that a missing value can be
/// reported as a validation error instead of a JSON rejection.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CredentialsRequest {
    /// User email, stored in the session cookie
    pub email: Option<String>,
    /// Password, accepted but never verified
    pub password: Option<String>,
}

/// Plain acknowledgement
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Error response model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FxHashMap<String, serde_json::Value>>,
    /// Response timestamp
    pub timestamp: i64,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            details: None,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: FxHashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Service version
    pub version: String,
    /// Service uptime in seconds
    pub uptime_seconds: u64,
}
