//! Performance metrics — pure functions over a trade list.
//!
//! Every metric is a pure reduction: trades in, scalar out. Zero trades is a
//! defined result (all-zero metrics), never a division by zero.

use serde::{Deserialize, Serialize};

use crate::domain::TradeRecord;

/// Aggregate performance of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_trades: usize,
    /// Percentage of trades with a strictly positive return.
    pub success_rate: f64,
    /// Mean percentage return per trade.
    pub avg_return: f64,
}

impl PerformanceMetrics {
    /// Reduce a trade list to its summary statistics.
    pub fn compute(trades: &[TradeRecord]) -> Self {
        Self {
            total_trades: trades.len(),
            success_rate: success_rate(trades),
            avg_return: avg_return(trades),
        }
    }

    pub fn zero() -> Self {
        Self {
            total_trades: 0,
            success_rate: 0.0,
            avg_return: 0.0,
        }
    }
}

/// Percentage of winning trades, 0 for an empty list.
pub fn success_rate(trades: &[TradeRecord]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let winners = trades.iter().filter(|t| t.is_winner()).count();
    winners as f64 / trades.len() as f64 * 100.0
}

/// Mean percentage return per trade, 0 for an empty list.
pub fn avg_return(trades: &[TradeRecord]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    trades.iter().map(|t| t.return_pct).sum::<f64>() / trades.len() as f64
}
