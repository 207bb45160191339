//! Domain types for SigLab

pub mod series;
pub mod signal;
pub mod trade;

pub use series::{PriceSeries, SeriesError};
pub use signal::{Signal, SignalSequence};
pub use trade::{TradeRecord, TradeSide};

/// Strategy identifier type alias
pub type StrategyId = String;
