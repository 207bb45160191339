//! Grid search — evaluates every combination and keeps the best score.
//!
//! Evaluation is a pure map over the enumerated combinations: each one
//! produces an outcome independently (so the map may run on rayon workers),
//! and best-selection happens afterwards as a reduction in enumeration
//! order. There is no shared "best so far" state.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use siglab_core::{
    ParamSet, PerformanceMetrics, PriceSeries, RegistryError, SignalSource, Simulator,
    StrategyId, StrategyRegistry,
};

use crate::grid::{GridError, ParamGrid};
use crate::score::{is_better, score};

/// Fatal search-setup errors. Per-combination failures are not here — they
/// are accumulated in the report as diagnostics.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("strategy error: {0}")]
    Strategy(#[from] RegistryError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

/// The winning combination of one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub params: ParamSet,
    pub score: f64,
    pub metrics: PerformanceMetrics,
}

/// A combination the signal source could not serve. Excluded from scoring —
/// a strategy that legitimately loses money still beats one that cannot run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationFailure {
    /// Position in enumeration order.
    pub index: usize,
    pub params: ParamSet,
    pub reason: String,
}

/// Everything a caller learns from one grid-search invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub strategy_id: StrategyId,
    /// Best-scoring combination; `None` only if nothing was evaluated
    /// (every combination failed or the search was cancelled immediately).
    pub best: Option<SearchResult>,
    /// Combinations that produced metrics and entered the comparison.
    pub evaluated: usize,
    pub failures: Vec<CombinationFailure>,
    /// Combinations never issued because of cancellation.
    pub not_issued: usize,
}

impl SearchReport {
    pub fn was_cancelled(&self) -> bool {
        self.not_issued > 0
    }
}

enum Outcome {
    Evaluated(PerformanceMetrics, f64),
    Failed(String),
    NotIssued,
}

/// Parameter-grid search executor.
pub struct GridSearch<'a> {
    registry: &'a StrategyRegistry,
    source: &'a dyn SignalSource,
    simulator: Simulator,
    parallel: bool,
}

impl<'a> GridSearch<'a> {
    pub fn new(registry: &'a StrategyRegistry, source: &'a dyn SignalSource) -> Self {
        Self {
            registry,
            source,
            simulator: Simulator::default(),
            parallel: true,
        }
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Replace the default simulator (e.g. a custom exit horizon).
    pub fn with_simulator(mut self, simulator: Simulator) -> Self {
        self.simulator = simulator;
        self
    }

    /// Evaluate every combination of `grid` for `strategy_id` and return the
    /// report.
    pub fn run(
        &self,
        strategy_id: &str,
        grid: &ParamGrid,
        prices: &PriceSeries,
    ) -> Result<SearchReport, SearchError> {
        self.run_cancellable(strategy_id, grid, prices, None)
    }

    /// Like [`run`](Self::run), with a cooperative cancellation flag.
    ///
    /// Once the flag is set no new combination is issued; in-flight ones
    /// drain, and their results remain valid candidates for the best.
    pub fn run_cancellable(
        &self,
        strategy_id: &str,
        grid: &ParamGrid,
        prices: &PriceSeries,
        cancel: Option<&AtomicBool>,
    ) -> Result<SearchReport, SearchError> {
        let spec = self.registry.require(strategy_id)?;
        grid.validate(spec)?;

        let combos: Vec<ParamSet> = grid.combinations().collect();

        let run_one = |params: &ParamSet| -> Outcome {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return Outcome::NotIssued;
            }
            match self.source.generate(prices, &spec.id, params) {
                Ok(signals) => {
                    let offset = spec.offset(params);
                    let trades = self.simulator.replay_from_offset(prices, &signals, offset);
                    let metrics = PerformanceMetrics::compute(&trades);
                    let combo_score = score(&metrics);
                    Outcome::Evaluated(metrics, combo_score)
                }
                Err(err) => Outcome::Failed(err.to_string()),
            }
        };

        // Indexed parallel collect preserves enumeration order, so the
        // reduction below sees combinations exactly as enumerated.
        let outcomes: Vec<Outcome> = if self.parallel {
            combos.par_iter().map(run_one).collect()
        } else {
            combos.iter().map(run_one).collect()
        };

        let mut best: Option<SearchResult> = None;
        let mut failures = Vec::new();
        let mut evaluated = 0;
        let mut not_issued = 0;

        for (index, (params, outcome)) in combos.into_iter().zip(outcomes).enumerate() {
            match outcome {
                Outcome::Evaluated(metrics, combo_score) => {
                    evaluated += 1;
                    let replaces = match &best {
                        Some(incumbent) => is_better(combo_score, incumbent.score),
                        None => combo_score.is_finite(),
                    };
                    if replaces {
                        best = Some(SearchResult {
                            params,
                            score: combo_score,
                            metrics,
                        });
                    }
                }
                Outcome::Failed(reason) => failures.push(CombinationFailure {
                    index,
                    params,
                    reason,
                }),
                Outcome::NotIssued => not_issued += 1,
            }
        }

        Ok(SearchReport {
            strategy_id: strategy_id.to_string(),
            best,
            evaluated,
            failures,
            not_issued,
        })
    }
}
