//! SigLab Runner — search orchestration on top of `siglab-core`.
//!
//! This crate builds on the engine to provide:
//! - Parameter grids with declared-order Cartesian enumeration
//! - Grid search (sequential or rayon-parallel) with per-combination
//!   failure diagnostics and cooperative cancellation
//! - The scoring function and best-selection reduction
//! - CSV loading for price and classifier-signal files
//! - TOML search configuration

pub mod config;
pub mod data_loader;
pub mod grid;
pub mod score;
pub mod search;

pub use config::{ConfigError, SearchConfig};
pub use data_loader::{
    load_close_prices, load_price_column, load_signal_column, LoadError, CLOSE_COLUMN,
    SIGNAL_COLUMN,
};
pub use grid::{Combinations, GridDimension, GridError, ParamGrid};
pub use score::{is_better, score};
pub use search::{CombinationFailure, GridSearch, SearchError, SearchReport, SearchResult};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn report_types_are_send_sync() {
        assert_send::<SearchReport>();
        assert_sync::<SearchReport>();
        assert_send::<SearchResult>();
        assert_sync::<SearchResult>();
        assert_send::<ParamGrid>();
        assert_sync::<ParamGrid>();
    }
}
