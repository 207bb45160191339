//! Trade simulator — replays a (price, signal) pair through a single-position
//! state machine.
//!
//! One position at a time, no pyramiding. A long opened by `+1` closes on the
//! first `-1` within the exit horizon; a short opened by `-1` closes on the
//! first `+1`. If no opposing signal arrives in time the position is
//! force-closed at `min(entry + horizon, len - 1)`. Every entry resolves to a
//! trade record; the simulator never leaves a position open past the end of
//! the data.

use crate::domain::{PriceSeries, Signal, TradeRecord, TradeSide};

/// Default number of indices to wait for an opposing signal before
/// force-closing a position.
pub const DEFAULT_EXIT_HORIZON: usize = 50;

/// Replay engine. Stateless between runs; cheap to clone into workers.
#[derive(Debug, Clone)]
pub struct Simulator {
    horizon: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(DEFAULT_EXIT_HORIZON)
    }
}

impl Simulator {
    pub fn new(horizon: usize) -> Self {
        Self { horizon }
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Replay an aligned (price, signal) pair and return the realized trades.
    ///
    /// Sequences of unequal length are truncated to the shorter of the two
    /// before the run. Indices in the returned records refer to the slices
    /// as given.
    pub fn replay(&self, prices: &[f64], signals: &[Signal]) -> Vec<TradeRecord> {
        let len = prices.len().min(signals.len());
        let mut trades = Vec::new();
        let mut i = 0;

        while i < len {
            let side = match signals[i] {
                Signal::Flat => {
                    i += 1;
                    continue;
                }
                Signal::Long => TradeSide::Long,
                Signal::Short => TradeSide::Short,
            };

            let exit_index = self.find_exit(signals, len, i, side);
            let entry_price = prices[i];
            let exit_price = prices[exit_index];
            let return_pct = match side {
                TradeSide::Long => (exit_price - entry_price) / entry_price * 100.0,
                TradeSide::Short => (entry_price - exit_price) / entry_price * 100.0,
            };

            trades.push(TradeRecord {
                side,
                entry_index: i,
                exit_index,
                entry_price,
                exit_price,
                return_pct,
            });

            // Indices passed over by a completed trade are never re-examined
            // as fresh entries.
            i = exit_index + 1;
        }

        trades
    }

    /// Replay after dropping the first `offset` warm-up elements from both
    /// sequences.
    ///
    /// An offset that consumes the whole series yields an empty trade list —
    /// a valid zero-trade outcome, not an error.
    pub fn replay_from_offset(
        &self,
        prices: &PriceSeries,
        signals: &[Signal],
        offset: usize,
    ) -> Vec<TradeRecord> {
        let signals = if offset >= signals.len() {
            &[]
        } else {
            &signals[offset..]
        };
        self.replay(prices.from_offset(offset), signals)
    }

    /// First index in `(entry, min(entry + horizon, len))` carrying the
    /// opposing signal; falls back to `min(entry + horizon, len - 1)` when
    /// none is found.
    ///
    /// The fallback may equal `entry` itself when the entry fired at the last
    /// index — the trade is still emitted, with entry == exit.
    fn find_exit(&self, signals: &[Signal], len: usize, entry: usize, side: TradeSide) -> usize {
        let opposing = match side {
            TradeSide::Long => Signal::Short,
            TradeSide::Short => Signal::Long,
        };

        let scan_end = (entry + self.horizon).min(len);
        for j in (entry + 1)..scan_end {
            if signals[j] == opposing {
                return j;
            }
        }

        (entry + self.horizon).min(len - 1)
    }
}
