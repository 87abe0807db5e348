//! Win/loss statistics over normalized trades

use serde::{Deserialize, Serialize};

use crate::trade::NormalizedTrade;

/// Aggregate performance summary
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStats {
    pub total_trades: u64,
    /// Trades with profit strictly above zero
    pub winning_trades: u64,
    /// Trades with profit strictly below zero
    pub losing_trades: u64,
    /// Percentage of all trades that are winners
    pub win_rate: f64,
    /// Sum of every defined profit
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    /// Mean of positive profits
    pub avg_profit: f64,
    /// Mean of negative profits, never positive
    pub avg_loss: f64,
}

impl TradeStats {
    /// Aggregate a slice of trades in a single pass
    #[must_use]
    pub fn from_trades(trades: &[NormalizedTrade]) -> Self {
        trades
            .iter()
            .fold(StatsAccumulator::default(), |mut acc, trade| {
                acc.record(trade.profit);
                acc
            })
            .finish()
    }
}

/// Running totals for [`TradeStats`]
#[derive(Debug, Clone, Default)]
pub struct StatsAccumulator {
    total: u64,
    wins: u64,
    losses: u64,
    gross_profit: f64,
    gross_loss: f64,
    pnl: f64,
}

impl StatsAccumulator {
    /// Record one trade's profit
    ///
    /// Absent and zero profits count toward the total only. Sums saturate at
    /// the finite `f64` range so every statistic stays a number.
    pub fn record(&mut self, profit: Option<f64>) {
        self.total += 1;

        let Some(profit) = profit.filter(|p| !p.is_nan()) else {
            return;
        };

        self.pnl = saturating_add(self.pnl, profit);
        if profit > 0.0 {
            self.wins += 1;
            self.gross_profit = saturating_add(self.gross_profit, profit);
        } else if profit < 0.0 {
            self.losses += 1;
            self.gross_loss = saturating_add(self.gross_loss, profit);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn finish(&self) -> TradeStats {
        let ratio = |numerator: f64, denominator: u64| {
            if denominator == 0 {
                0.0
            } else {
                numerator / denominator as f64
            }
        };

        TradeStats {
            total_trades: self.total,
            winning_trades: self.wins,
            losing_trades: self.losses,
            win_rate: ratio(self.wins as f64, self.total) * 100.0,
            total_pnl: self.pnl,
            avg_profit: ratio(self.gross_profit, self.wins),
            avg_loss: ratio(self.gross_loss, self.losses),
        }
    }
}

fn saturating_add(sum: f64, value: f64) -> f64 {
    (sum + value.clamp(f64::MIN, f64::MAX)).clamp(f64::MIN, f64::MAX)
}
