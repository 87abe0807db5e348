//! Header alias table
//!
//! Maps the many spellings brokers use for a column (English, Polish, with or
//! without punctuation and diacritics) onto the canonical trade schema.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fields of the canonical trade schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    Date,
    Instrument,
    Type,
    Volume,
    EntryPrice,
    ExitPrice,
    Profit,
}

impl CanonicalField {
    /// Every canonical field, in schema order
    pub const ALL: [Self; 7] = [
        Self::Date,
        Self::Instrument,
        Self::Type,
        Self::Volume,
        Self::EntryPrice,
        Self::ExitPrice,
        Self::Profit,
    ];

    /// Field name as it appears in JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Instrument => "instrument",
            Self::Type => "type",
            Self::Volume => "volume",
            Self::EntryPrice => "entryPrice",
            Self::ExitPrice => "exitPrice",
            Self::Profit => "profit",
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alias table, one list per canonical field
///
/// Aliases are tried in list order, so earlier entries win when a header row
/// contains several candidates for the same field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub date: Vec<String>,
    pub instrument: Vec<String>,
    #[serde(rename = "type")]
    pub trade_type: Vec<String>,
    pub volume: Vec<String>,
    pub entry_price: Vec<String>,
    pub exit_price: Vec<String>,
    pub profit: Vec<String>,
}

fn owned(aliases: &[&str]) -> Vec<String> {
    aliases.iter().map(|alias| (*alias).to_string()).collect()
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            date: owned(&[
                "date",
                "data",
                "open time",
                "open_time",
                "czas otwarcia",
                "data otwarcia",
                "time",
                "datetime",
            ]),
            instrument: owned(&["instrument", "symbol", "market", "rynek", "ticker", "walor"]),
            trade_type: owned(&[
                "type",
                "typ",
                "side",
                "direction",
                "kierunek",
                "action",
                "strona",
            ]),
            volume: owned(&["volume", "wolumen", "size", "ilosc", "quantity", "qty", "lots"]),
            entry_price: owned(&[
                "entry price",
                "entry_price",
                "cena wejścia",
                "cena_wejscia",
                "open",
                "open price",
                "entry",
            ]),
            exit_price: owned(&[
                "exit price",
                "exit_price",
                "cena wyjścia",
                "cena_wyjscia",
                "close",
                "close price",
                "exit",
            ]),
            profit: owned(&[
                "profit",
                "p/l",
                "p&l",
                "pnl",
                "wynik",
                "zysk/strata",
                "zysk",
                "strata",
                "net profit",
            ]),
        }
    }
}

impl ColumnAliases {
    /// Aliases registered for a canonical field
    #[must_use]
    pub fn for_field(&self, field: CanonicalField) -> &[String] {
        match field {
            CanonicalField::Date => &self.date,
            CanonicalField::Instrument => &self.instrument,
            CanonicalField::Type => &self.trade_type,
            CanonicalField::Volume => &self.volume,
            CanonicalField::EntryPrice => &self.entry_price,
            CanonicalField::ExitPrice => &self.exit_price,
            CanonicalField::Profit => &self.profit,
        }
    }

    /// Find the header index for a field
    ///
    /// `normalized_headers` must already be passed through [`normalize_header`].
    #[must_use]
    pub fn find_column(&self, field: CanonicalField, normalized_headers: &[String]) -> Option<usize> {
        self.for_field(field).iter().find_map(|alias| {
            let alias = normalize_header(alias);
            if alias.is_empty() {
                return None;
            }
            normalized_headers.iter().position(|header| *header == alias)
        })
    }
}

/// Normalize a header cell for alias comparison
///
/// Lower-cases, removes diacritics and strips everything that is not an
/// ASCII letter or digit, so `"Cena Wejścia"`, `"cena_wejscia"` and
/// `"CENA-WEJSCIA"` all compare equal.
#[must_use]
pub fn normalize_header(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
