//! Trade Reporting
//!
//! Normalizes broker CSV exports into a canonical trade schema and computes
//! win/loss statistics.
//!
//! Pipeline:
//! - UTF-8 decoding and line splitting
//! - delimiter detection (`;` or `,`)
//! - header resolution through a configurable alias table
//! - numeric coercion with comma decimal support
//! - profit derivation from entry/exit prices
//! - single-pass aggregation into [`TradeStats`]

pub mod aliases;
pub mod analyzer;
pub mod error;
pub mod normalizer;
pub mod numeric;
pub mod stats;
pub mod trade;

pub use aliases::{CanonicalField, ColumnAliases};
pub use analyzer::{AnalysisReport, TradeAnalyzer};
pub use error::{ColumnDiagnostics, ReportingError, ReportingResult};
pub use normalizer::{ColumnMapping, TradeNormalizer};
pub use stats::{StatsAccumulator, TradeStats};
pub use trade::{NormalizedTrade, TradeType};
