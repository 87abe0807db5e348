//! Upload-to-report pipeline

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aliases::ColumnAliases;
use crate::error::{ReportingError, ReportingResult};
use crate::normalizer::TradeNormalizer;
use crate::stats::TradeStats;
use crate::trade::NormalizedTrade;

const UTF8_BOM: char = '\u{feff}';

/// Statistics plus the normalized trade table for one upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub stats: TradeStats,
    pub rows: Vec<NormalizedTrade>,
}

/// Stateless analyzer, safe to share between requests
#[derive(Debug, Clone, Default)]
pub struct TradeAnalyzer {
    normalizer: TradeNormalizer,
}

impl TradeAnalyzer {
    #[must_use]
    pub const fn new(aliases: ColumnAliases) -> Self {
        Self {
            normalizer: TradeNormalizer::new(aliases),
        }
    }

    #[must_use]
    pub const fn normalizer(&self) -> &TradeNormalizer {
        &self.normalizer
    }

    /// Analyze raw uploaded bytes
    ///
    /// Bytes must be valid UTF-8; a leading byte order mark is ignored.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> ReportingResult<AnalysisReport> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            debug!("Rejecting upload that is not UTF-8: {}", e);
            ReportingError::MalformedInput
        })?;
        self.analyze(text)
    }

    /// Normalize text and aggregate statistics
    pub fn analyze(&self, text: &str) -> ReportingResult<AnalysisReport> {
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
        let rows = self.normalizer.normalize(text)?;
        let stats = TradeStats::from_trades(&rows);

        info!(
            trades = stats.total_trades,
            win_rate = stats.win_rate,
            total_pnl = stats.total_pnl,
            "Trade history analyzed"
        );

        Ok(AnalysisReport { stats, rows })
    }
}
