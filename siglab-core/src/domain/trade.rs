//! TradeRecord — a completed round-trip trade.

use serde::{Deserialize, Serialize};

/// Direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Long,
    Short,
}

/// One realized round-trip trade: entry → exit.
///
/// Indices are relative to the offset-truncated series the simulator ran
/// over. A degenerate record with `entry_index == exit_index` is legal: it is
/// the force-close of an entry fired with no room left to scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub side: TradeSide,
    pub entry_index: usize,
    pub exit_index: usize,
    pub entry_price: f64,
    pub exit_price: f64,
    /// Percentage return; positive means the trade made money on its side.
    pub return_pct: f64,
}

impl TradeRecord {
    pub fn is_winner(&self) -> bool {
        self.return_pct > 0.0
    }

    /// Number of indices the position was held.
    pub fn bars_held(&self) -> usize {
        self.exit_index - self.entry_index
    }
}
