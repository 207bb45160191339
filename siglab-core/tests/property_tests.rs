//! Property tests for simulator and metrics invariants.
//!
//! Uses proptest to verify:
//! 1. Every trade's indices are in bounds and ordered (entry <= exit)
//! 2. Trades never overlap and are emitted in entry order
//! 3. Exit distance never exceeds the horizon
//! 4. No position survives past the end of the data (every entry resolves)
//! 5. Metrics reduction is pure and bounded

use proptest::prelude::*;
use siglab_core::{PerformanceMetrics, Signal, Simulator};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_signal() -> impl Strategy<Value = Signal> {
    prop_oneof![
        Just(Signal::Short),
        Just(Signal::Flat),
        Just(Signal::Long),
    ]
}

fn arb_run() -> impl Strategy<Value = (Vec<f64>, Vec<Signal>)> {
    (1usize..200).prop_flat_map(|len| {
        (
            prop::collection::vec(1.0..1000.0f64, len),
            prop::collection::vec(arb_signal(), len),
        )
    })
}

fn arb_horizon() -> impl Strategy<Value = usize> {
    1usize..80
}

proptest! {
    /// Entry and exit indices stay inside the data and are ordered.
    #[test]
    fn trade_indices_in_bounds((prices, signals) in arb_run(), horizon in arb_horizon()) {
        let sim = Simulator::new(horizon);
        let trades = sim.replay(&prices, &signals);
        for t in &trades {
            prop_assert!(t.entry_index <= t.exit_index);
            prop_assert!(t.exit_index < prices.len());
        }
    }

    /// Trades never overlap: each entry starts strictly after the previous exit.
    #[test]
    fn trades_do_not_overlap((prices, signals) in arb_run(), horizon in arb_horizon()) {
        let sim = Simulator::new(horizon);
        let trades = sim.replay(&prices, &signals);
        for pair in trades.windows(2) {
            prop_assert!(pair[1].entry_index > pair[0].exit_index);
        }
    }

    /// A position is held at most `horizon` indices.
    #[test]
    fn exit_within_horizon((prices, signals) in arb_run(), horizon in arb_horizon()) {
        let sim = Simulator::new(horizon);
        let trades = sim.replay(&prices, &signals);
        for t in &trades {
            prop_assert!(t.exit_index - t.entry_index <= horizon);
        }
    }

    /// Every non-flat signal at a scan position becomes a trade: the trade
    /// count equals the number of entries actually visited, and the last
    /// trade is closed within the data.
    #[test]
    fn every_entry_resolves((prices, signals) in arb_run(), horizon in arb_horizon()) {
        let sim = Simulator::new(horizon);
        let trades = sim.replay(&prices, &signals);

        // Re-walk the scan: every visited entry index must appear as a trade.
        let mut expected = 0usize;
        let mut i = 0;
        while i < signals.len() {
            if signals[i].is_entry() {
                prop_assert!(expected < trades.len());
                prop_assert_eq!(trades[expected].entry_index, i);
                i = trades[expected].exit_index + 1;
                expected += 1;
            } else {
                i += 1;
            }
        }
        prop_assert_eq!(trades.len(), expected);
    }

    /// Replay is deterministic.
    #[test]
    fn replay_is_deterministic((prices, signals) in arb_run(), horizon in arb_horizon()) {
        let sim = Simulator::new(horizon);
        prop_assert_eq!(sim.replay(&prices, &signals), sim.replay(&prices, &signals));
    }

    /// Metrics are bounded and idempotent for any replay output.
    #[test]
    fn metrics_are_bounded((prices, signals) in arb_run(), horizon in arb_horizon()) {
        let sim = Simulator::new(horizon);
        let trades = sim.replay(&prices, &signals);
        let m = PerformanceMetrics::compute(&trades);

        prop_assert_eq!(m.total_trades, trades.len());
        prop_assert!((0.0..=100.0).contains(&m.success_rate));
        prop_assert!(m.avg_return.is_finite());
        prop_assert_eq!(m.clone(), PerformanceMetrics::compute(&trades));
    }
}
