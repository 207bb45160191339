//! Minimal grid-search wiring: a toy signal source, the built-in registry,
//! and a synthetic price series.
//!
//! Run with: `cargo run -p siglab-runner --example grid_search`

use siglab_core::{
    ParamSet, ParamValue, PriceSeries, Signal, SignalSource, SourceError, StrategyRegistry,
};
use siglab_runner::{GridSearch, ParamGrid};

/// Toy generator: flips long/short every `period` indices. Stands in for a
/// real indicator library behind the same trait.
struct FlipSource;

impl SignalSource for FlipSource {
    fn generate(
        &self,
        prices: &PriceSeries,
        _strategy_id: &str,
        params: &ParamSet,
    ) -> Result<Vec<Signal>, SourceError> {
        let period = params
            .get("period")
            .map(|v| v.as_period())
            .filter(|&p| p > 0)
            .ok_or_else(|| SourceError::Generation("period must be positive".into()))?;

        Ok((0..prices.len())
            .map(|i| {
                if i % period != 0 {
                    Signal::Flat
                } else if (i / period) % 2 == 0 {
                    Signal::Long
                } else {
                    Signal::Short
                }
            })
            .collect())
    }

    fn name(&self) -> &str {
        "flip"
    }
}

fn main() {
    let prices = PriceSeries::new(
        (0..500)
            .map(|i| 100.0 + (i as f64 * 0.07).sin() * 15.0 + i as f64 * 0.01)
            .collect(),
    )
    .expect("synthetic prices are positive");

    let registry = StrategyRegistry::builtin();
    let grid = ParamGrid::new()
        .dimension("period", (4i64..=24).step_by(4).map(ParamValue::Int))
        .dimension("overbought", [ParamValue::Int(70)])
        .dimension("oversold", [ParamValue::Int(30)]);

    let search = GridSearch::new(&registry, &FlipSource);
    let report = search.run("rsi", &grid, &prices).expect("search setup");

    println!("evaluated {} combinations", report.evaluated);
    for failure in &report.failures {
        eprintln!("combination {} skipped: {}", failure.index, failure.reason);
    }
    match report.best {
        Some(best) => {
            println!("best score: {:.4}", best.score);
            println!(
                "trades: {}  success rate: {:.1}%  avg return: {:.3}%",
                best.metrics.total_trades, best.metrics.success_rate, best.metrics.avg_return
            );
            for (name, value) in &best.params {
                println!("  {name} = {value}");
            }
        }
        None => println!("no combination could be evaluated"),
    }
}
