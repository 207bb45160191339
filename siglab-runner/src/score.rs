//! Scoring — ranks one combination's metrics against another's.

use siglab_core::PerformanceMetrics;

/// Score for the grid search: `success_rate × avg_return`.
///
/// Rewards configurations that are frequently correct and profitable per
/// trade at the same time. Deliberately not risk-adjusted: no variance or
/// drawdown term, and no normalization against trade count, so a single
/// lucky trade can outscore a large consistent sample.
pub fn score(metrics: &PerformanceMetrics) -> f64 {
    metrics.success_rate * metrics.avg_return
}

/// True if `candidate` should replace `incumbent`.
///
/// Strictly greater only — an equal score keeps the incumbent, so the
/// first-enumerated maximum wins. Non-finite candidates never win.
pub fn is_better(candidate: f64, incumbent: f64) -> bool {
    candidate.is_finite() && candidate > incumbent
}
