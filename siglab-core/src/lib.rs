//! SigLab Core — trade-simulation engine for discrete trading signals.
//!
//! This crate contains the heart of the system:
//! - Domain types (price series, signals, trade records)
//! - The replay state machine that turns a (price, signal) pair into trades
//! - Pure performance-metric reduction over trade lists
//! - The `SignalSource` trait (rule-based generators and classifier
//!   predictions both plug in here)
//! - The strategy registry: required parameters, defaults, and warm-up
//!   offset rules as data

pub mod domain;
pub mod metrics;
pub mod params;
pub mod registry;
pub mod simulator;
pub mod source;

pub use domain::{
    PriceSeries, SeriesError, Signal, SignalSequence, StrategyId, TradeRecord, TradeSide,
};
pub use metrics::PerformanceMetrics;
pub use params::{ParamSet, ParamValue};
pub use registry::{RegistryError, StrategyRegistry, StrategySpec};
pub use simulator::{Simulator, DEFAULT_EXIT_HORIZON};
pub use source::{PrecomputedSource, SignalSource, SourceError};
