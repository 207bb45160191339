//! Signal sources — where signal sequences come from.
//!
//! The engine never generates signals itself. Rule-based indicator
//! generators and trained-classifier predictions both sit behind the same
//! trait, so one simulator serves both origins.

use std::time::Duration;

use thiserror::Error;

use crate::domain::{PriceSeries, SignalSequence};
use crate::params::ParamSet;

/// Failure modes of a signal source. All of them are recoverable from the
/// search's point of view: the combination is skipped, not the whole search.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("signal generation failed: {0}")]
    Generation(String),

    #[error("signal generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("insufficient data: need at least {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },
}

/// A producer of signal sequences for a given price series and parameter
/// assignment.
///
/// # Invariants
/// - `generate()` MUST be deterministic for the same inputs
/// - `generate()` MUST NOT mutate shared state; implementations run
///   concurrently across search workers
/// - A returned sequence shorter than the price series is legal; the
///   simulator truncates both to the shorter length
///
/// Implementations that call out to anything slow own their wall-clock
/// bound and surface it as [`SourceError::Timeout`].
pub trait SignalSource: Send + Sync {
    fn generate(
        &self,
        prices: &PriceSeries,
        strategy_id: &str,
        params: &ParamSet,
    ) -> Result<SignalSequence, SourceError>;

    /// Source name for diagnostics.
    fn name(&self) -> &str;
}

/// A source that replays a fixed, precomputed sequence regardless of
/// parameters — classifier predictions loaded from a file, typically.
#[derive(Debug, Clone)]
pub struct PrecomputedSource {
    name: String,
    signals: SignalSequence,
}

impl PrecomputedSource {
    pub fn new(name: impl Into<String>, signals: SignalSequence) -> Self {
        Self {
            name: name.into(),
            signals,
        }
    }
}

impl SignalSource for PrecomputedSource {
    fn generate(
        &self,
        _prices: &PriceSeries,
        _strategy_id: &str,
        _params: &ParamSet,
    ) -> Result<SignalSequence, SourceError> {
        Ok(self.signals.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
