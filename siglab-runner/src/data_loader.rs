//! CSV loading for the runner.
//!
//! Two file shapes, both header-addressed so extra columns are ignored:
//! - price files with a `Close` column (the downloader's daily-bar format)
//! - signal files with a {-1, 0, 1} prediction column (classifier output)
//!
//! The core never touches files; everything here turns rows into domain
//! types and nothing more.

use std::path::Path;

use thiserror::Error;

use siglab_core::{PriceSeries, SeriesError, Signal, SignalSequence};

/// Default column name for closing prices.
pub const CLOSE_COLUMN: &str = "Close";

/// Default column name for signal files.
pub const SIGNAL_COLUMN: &str = "Signal";

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no '{column}' column in file header")]
    MissingColumn { column: String },

    #[error("row {row}: cannot parse '{value}' as a price")]
    BadPrice { row: usize, value: String },

    #[error("row {row}: '{value}' is not a signal in {{-1, 0, 1}}")]
    BadSignal { row: usize, value: String },

    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// Load closing prices from the named column of a CSV file.
pub fn load_price_column(path: &Path, column: &str) -> Result<PriceSeries, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let idx = column_index(&reader.headers()?.clone(), column)?;

    let mut closes = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = record.get(idx).unwrap_or("").trim();
        let value: f64 = field.parse().map_err(|_| LoadError::BadPrice {
            row,
            value: field.to_string(),
        })?;
        closes.push(value);
    }

    Ok(PriceSeries::new(closes)?)
}

/// Load closing prices from the conventional `Close` column.
pub fn load_close_prices(path: &Path) -> Result<PriceSeries, LoadError> {
    load_price_column(path, CLOSE_COLUMN)
}

/// Load a {-1, 0, 1} signal sequence from the named column of a CSV file.
pub fn load_signal_column(path: &Path, column: &str) -> Result<SignalSequence, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let idx = column_index(&reader.headers()?.clone(), column)?;

    let mut signals = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = record.get(idx).unwrap_or("").trim();
        let signal = field
            .parse::<i8>()
            .ok()
            .and_then(Signal::from_wire)
            .ok_or_else(|| LoadError::BadSignal {
                row,
                value: field.to_string(),
            })?;
        signals.push(signal);
    }

    Ok(signals)
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LoadError::MissingColumn {
            column: column.to_string(),
        })
}
