//! Serializable search configuration (TOML).
//!
//! ```toml
//! strategy = "macd"
//! data = "data/AAPL_testing.csv"
//! horizon = 50        # optional, defaults to the simulator default
//! parallel = true     # optional, defaults to true
//!
//! [[grid]]
//! name = "short_period"
//! values = [7, 12]
//!
//! [[grid]]
//! name = "long_period"
//! values = [26, 54]
//!
//! [[grid]]
//! name = "signal_period"
//! values = [8, 9]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use siglab_core::{Simulator, StrategySpec};

use crate::grid::{GridDimension, ParamGrid};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything needed to reproduce one grid search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Strategy id, resolved against the registry at search setup.
    pub strategy: String,

    /// Path to the prices CSV (a `Close` column).
    pub data: PathBuf,

    /// Exit-horizon override; `None` keeps the simulator default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon: Option<usize>,

    /// Evaluate combinations on rayon workers.
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Grid dimensions, in enumeration order.
    pub grid: Vec<GridDimension>,
}

fn default_parallel() -> bool {
    true
}

impl SearchConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn param_grid(&self) -> ParamGrid {
        ParamGrid::from_dimensions(self.grid.clone())
    }

    pub fn simulator(&self) -> Simulator {
        match self.horizon {
            Some(horizon) => Simulator::new(horizon),
            None => Simulator::default(),
        }
    }

    /// A single-point config from a strategy's registry defaults — the
    /// smallest search that can run.
    pub fn default_for(spec: &StrategySpec, data: impl Into<PathBuf>) -> Self {
        Self {
            strategy: spec.id.clone(),
            data: data.into(),
            horizon: None,
            parallel: true,
            grid: spec
                .defaults
                .iter()
                .map(|(name, value)| GridDimension {
                    name: name.clone(),
                    values: vec![*value],
                })
                .collect(),
        }
    }
}
