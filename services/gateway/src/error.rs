//! Error types for the trade gateway

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{error, warn};
use trade_reporting::ReportingError;

use crate::models::ErrorResponse;

/// Gateway error types, rendered as JSON [`ErrorResponse`] bodies
#[derive(Error, Debug)]
pub enum ApiError {
    /// No `file` field in the upload form
    #[error("No file was uploaded. Choose a CSV file with your trades.")]
    MissingFile,

    /// The multipart body could not be read
    #[error("The upload could not be read: {0}")]
    InvalidUpload(String),

    /// Login or registration without email or password
    #[error("Email and password are required.")]
    MissingCredentials,

    /// Request body was not the expected JSON
    #[error("Invalid input data.")]
    InvalidInput,

    /// Normalization or aggregation failure
    #[error(transparent)]
    Reporting(#[from] ReportingError),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile
            | Self::InvalidUpload(_)
            | Self::MissingCredentials
            | Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Reporting(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Reporting(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFile => "MISSING_FILE",
            Self::InvalidUpload(_) => "INVALID_UPLOAD",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidInput => "INVALID_INPUT",
            Self::Reporting(ReportingError::MalformedInput) => "MALFORMED_FILE",
            Self::Reporting(ReportingError::NoDataRows) => "EMPTY_FILE",
            Self::Reporting(ReportingError::MissingColumns { .. }) => "MISSING_COLUMNS",
            Self::Reporting(ReportingError::Csv(_)) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn to_error_response(&self) -> ErrorResponse {
        if self.status_code().is_server_error() {
            return ErrorResponse::new(
                self.error_code(),
                "Unexpected error while processing the request.",
            );
        }

        let response = ErrorResponse::new(self.error_code(), self.to_string());
        match self {
            Self::Reporting(ReportingError::MissingColumns { debug, .. }) => {
                let mut details = FxHashMap::default();
                details.insert("headers".to_string(), serde_json::json!(debug.headers));
                details.insert("resolved".to_string(), serde_json::json!(debug.resolved));
                response.with_details(details)
            }
            _ => response,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error_code = self.error_code(), "Request failed: {}", self);
        } else {
            warn!(error_code = self.error_code(), "Request rejected: {}", self);
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;
