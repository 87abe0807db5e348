//! Error types for trade history normalization

use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;

/// Snapshot of header resolution, attached to column errors for debugging
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDiagnostics {
    /// Header cells exactly as they appeared in the file
    pub headers: Vec<String>,
    /// Canonical field name mapped to the index of the header it resolved to
    pub resolved: FxHashMap<String, Option<usize>>,
}

/// Errors raised while turning an uploaded file into trades
#[derive(Error, Debug)]
pub enum ReportingError {
    /// The file content is not readable text
    #[error("The file could not be read as UTF-8 text")]
    MalformedInput,

    /// Fewer than a header line plus one data line
    #[error("The file contains no data rows")]
    NoDataRows,

    /// Required canonical columns could not be matched against the header
    #[error(
        "Could not match the required columns: {requirement}. \
         Export the trade history from your broker and upload the file unchanged."
    )]
    MissingColumns {
        /// Which requirement was not met
        requirement: String,
        /// Raw headers and resolved mapping
        debug: Box<ColumnDiagnostics>,
    },

    /// Low-level CSV reader failure
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

impl ReportingError {
    /// Whether the error was caused by the uploaded content rather than by the system
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput | Self::NoDataRows | Self::MissingColumns { .. }
        )
    }
}

/// Type alias for reporting results
pub type ReportingResult<T> = Result<T, ReportingError>;
