//! CSV normalizer
//!
//! Turns loosely structured broker exports into [`NormalizedTrade`] records:
//! - line splitting with blank-line removal
//! - `;` / `,` delimiter sniffing on the header line
//! - alias-based header resolution and validation
//! - per-row numeric coercion and profit derivation

use csv::StringRecord;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::aliases::{CanonicalField, ColumnAliases, normalize_header};
use crate::error::{ColumnDiagnostics, ReportingError, ReportingResult};
use crate::numeric::coerce_cell;
use crate::trade::{NormalizedTrade, TradeType};

/// Split text into trimmed, non-blank lines
///
/// Handles both `\n` and `\r\n` line endings.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Pick the field delimiter from the header line
///
/// `;` is chosen only when it strictly outnumbers `,`.
#[must_use]
pub fn detect_delimiter(header_line: &str) -> u8 {
    let semicolons = header_line.matches(';').count();
    let commas = header_line.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}

/// Header index resolved for each canonical field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnMapping {
    columns: [Option<usize>; CanonicalField::ALL.len()],
}

impl ColumnMapping {
    /// Resolve every canonical field against a header row
    #[must_use]
    pub fn resolve<S: AsRef<str>>(headers: &[S], aliases: &ColumnAliases) -> Self {
        let normalized: Vec<String> = headers
            .iter()
            .map(|header| normalize_header(header.as_ref()))
            .collect();

        let mut mapping = Self::default();
        for field in CanonicalField::ALL {
            mapping.columns[field as usize] = aliases.find_column(field, &normalized);
        }
        mapping
    }

    /// Header index of a field, if resolved
    #[must_use]
    pub const fn get(&self, field: CanonicalField) -> Option<usize> {
        self.columns[field as usize]
    }

    #[must_use]
    pub const fn is_resolved(&self, field: CanonicalField) -> bool {
        self.get(field).is_some()
    }

    /// Describe the first unmet column requirement, if any
    ///
    /// Date, instrument and type are always required. Profit must be
    /// resolvable directly or through both entry and exit prices.
    #[must_use]
    pub fn unmet_requirement(&self) -> Option<String> {
        let mut unmet: Vec<String> = [
            CanonicalField::Date,
            CanonicalField::Instrument,
            CanonicalField::Type,
        ]
        .into_iter()
        .filter(|field| !self.is_resolved(*field))
        .map(|field| field.as_str().to_string())
        .collect();

        let derivable = self.is_resolved(CanonicalField::EntryPrice)
            && self.is_resolved(CanonicalField::ExitPrice);
        if !self.is_resolved(CanonicalField::Profit) && !derivable {
            unmet.push("profit (or both entryPrice and exitPrice)".to_string());
        }

        if unmet.is_empty() {
            None
        } else {
            Some(unmet.join(", "))
        }
    }

    /// Check the mapping is usable for row decoding
    pub fn validate<S: AsRef<str>>(&self, headers: &[S]) -> ReportingResult<()> {
        match self.unmet_requirement() {
            None => Ok(()),
            Some(requirement) => Err(ReportingError::MissingColumns {
                requirement,
                debug: Box::new(self.diagnostics(headers)),
            }),
        }
    }

    /// Raw headers together with the resolved indices
    #[must_use]
    pub fn diagnostics<S: AsRef<str>>(&self, headers: &[S]) -> ColumnDiagnostics {
        let resolved: FxHashMap<String, Option<usize>> = CanonicalField::ALL
            .into_iter()
            .map(|field| (field.as_str().to_string(), self.get(field)))
            .collect();

        ColumnDiagnostics {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            resolved,
        }
    }

    /// Decode one data record
    ///
    /// Cells missing from short rows are treated as absent. A non-empty profit
    /// cell always wins, even when it does not coerce to a number. Profit is
    /// derived from entry and exit prices only when that cell is blank or
    /// missing.
    #[must_use]
    pub fn decode(&self, record: &StringRecord) -> NormalizedTrade {
        let cell = |field: CanonicalField| self.get(field).and_then(|index| record.get(index));

        let trade_type = TradeType::classify(cell(CanonicalField::Type).unwrap_or_default());
        let volume = coerce_cell(cell(CanonicalField::Volume));
        let entry_price = coerce_cell(cell(CanonicalField::EntryPrice));
        let exit_price = coerce_cell(cell(CanonicalField::ExitPrice));

        let profit = match cell(CanonicalField::Profit) {
            Some(raw) if !raw.trim().is_empty() => coerce_cell(Some(raw)),
            _ => match (entry_price, exit_price) {
                (Some(entry), Some(exit)) => Some(trade_type.derive_profit(entry, exit)),
                _ => None,
            },
        };

        NormalizedTrade {
            date: cell(CanonicalField::Date).unwrap_or_default().to_string(),
            instrument: cell(CanonicalField::Instrument).unwrap_or_default().to_string(),
            trade_type,
            volume,
            entry_price,
            exit_price,
            profit,
        }
    }
}

/// Normalizer over an injected alias table
#[derive(Debug, Clone, Default)]
pub struct TradeNormalizer {
    aliases: ColumnAliases,
}

impl TradeNormalizer {
    #[must_use]
    pub const fn new(aliases: ColumnAliases) -> Self {
        Self { aliases }
    }

    #[must_use]
    pub const fn aliases(&self) -> &ColumnAliases {
        &self.aliases
    }

    /// Normalize CSV text into canonical trades
    ///
    /// All or nothing: a structural problem rejects the whole file.
    pub fn normalize(&self, text: &str) -> ReportingResult<Vec<NormalizedTrade>> {
        let lines = split_lines(text);
        if lines.len() < 2 {
            return Err(ReportingError::NoDataRows);
        }

        let delimiter = detect_delimiter(lines[0]);
        debug!(
            delimiter = %char::from(delimiter),
            lines = lines.len(),
            "Detected CSV layout"
        );

        let body = lines.join("\n");
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(body.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mapping = ColumnMapping::resolve(&headers, &self.aliases);
        mapping.validate(&headers)?;
        debug!(?mapping, "Resolved header columns");

        let mut trades = Vec::with_capacity(lines.len() - 1);
        for record in reader.records() {
            trades.push(mapping.decode(&record?));
        }

        Ok(trades)
    }
}
