//! Canonical trade record

use serde::{Deserialize, Serialize};

/// Direction of a trade
///
/// Serialized as `"BUY"`, `"SELL"`, `"UNKNOWN"`, or the upper-cased text of an
/// unrecognized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeType {
    Buy,
    Sell,
    Unknown,
    Other(String),
}

impl TradeType {
    /// Classify a raw type cell
    ///
    /// Recognizes English and Polish spellings (`buy`, `b`, `kupno`, `long`,
    /// `sell`, `s`, `sprzedaż`, `short`). Buy indicators are checked first.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_lowercase();

        if lower.starts_with('b') || lower.contains("kup") || lower == "long" {
            Self::Buy
        } else if lower.starts_with('s') || lower.contains("sprz") || lower == "short" {
            Self::Sell
        } else if lower.is_empty() {
            Self::Unknown
        } else {
            Self::Other(trimmed.to_uppercase())
        }
    }

    /// Profit implied by moving from `entry` to `exit`
    ///
    /// Only SELL inverts the difference; every other type, including
    /// UNKNOWN, uses the BUY formula. The result saturates at the finite
    /// `f64` range.
    #[must_use]
    pub fn derive_profit(&self, entry: f64, exit: f64) -> f64 {
        let profit = match self {
            Self::Sell => entry - exit,
            Self::Buy | Self::Unknown | Self::Other(_) => exit - entry,
        };
        profit.clamp(f64::MIN, f64::MAX)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Unknown => "UNKNOWN",
            Self::Other(text) => text,
        }
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TradeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "BUY" => Self::Buy,
            "SELL" => Self::Sell,
            "UNKNOWN" | "" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<TradeType> for String {
    fn from(value: TradeType) -> Self {
        match value {
            TradeType::Other(text) => text,
            other => other.as_str().to_string(),
        }
    }
}

/// A trade mapped onto the canonical schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTrade {
    /// Date text as found in the source
    pub date: String,
    /// Symbol or market identifier
    pub instrument: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<f64>,
    /// Explicit or derived profit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
}
