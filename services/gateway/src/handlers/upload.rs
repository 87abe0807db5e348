//! CSV upload handler

use axum::{
    body::Bytes,
    extract::{Multipart, State, multipart::MultipartRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use trade_reporting::{AnalysisReport, TradeAnalyzer};

use crate::error::{ApiError, ApiResult};

/// Multipart field carrying the CSV file
pub const FILE_FIELD: &str = "file";

/// Upload handlers
#[derive(Clone)]
pub struct UploadHandlers {
    analyzer: Arc<TradeAnalyzer>,
}

impl UploadHandlers {
    pub const fn new(analyzer: Arc<TradeAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Analyze an uploaded trade history
    ///
    /// Responds with `{ stats, rows }`, or an error body when the file is
    /// missing or cannot be mapped onto the trade schema.
    pub async fn upload(
        State(handlers): State<Self>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> ApiResult<Json<AnalysisReport>> {
        let mut multipart = multipart.map_err(|e| {
            warn!("Upload without a multipart body: {}", e);
            ApiError::MissingFile
        })?;

        let bytes = read_file_field(&mut multipart)
            .await?
            .ok_or(ApiError::MissingFile)?;
        info!(bytes = bytes.len(), "CSV upload received");

        let report = handlers.analyzer.analyze_bytes(&bytes)?;
        Ok(Json(report))
    }
}

/// Read the first `file` field of the form
///
/// A field with an empty file name and no content is what browsers send
/// when no file was chosen, so it counts as missing.
async fn read_file_field(multipart: &mut Multipart) -> ApiResult<Option<Bytes>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidUpload(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidUpload(e.body_text()))?;
        debug!(?file_name, bytes = bytes.len(), "Read upload field");

        if bytes.is_empty() && file_name.as_deref().is_some_and(str::is_empty) {
            return Ok(None);
        }
        return Ok(Some(bytes));
    }

    Ok(None)
}
