//! PriceSeries — an immutable, chronologically ordered run of closing prices.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised at series construction.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("price at index {index} is not a positive finite number: {value}")]
    InvalidPrice { index: usize, value: f64 },
}

/// Ordered sequence of positive closing prices, index-addressed.
///
/// Construction validates every element; after that the series is read-only
/// and may be shared by reference across search workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Build a series, rejecting non-finite and non-positive prices.
    pub fn new(closes: Vec<f64>) -> Result<Self, SeriesError> {
        for (index, &value) in closes.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(SeriesError::InvalidPrice { index, value });
            }
        }
        Ok(Self { closes })
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.closes
    }

    /// Borrowed view with the first `offset` elements dropped.
    ///
    /// An offset at or past the end yields an empty slice, which the
    /// simulator treats as a zero-trade run.
    pub fn from_offset(&self, offset: usize) -> &[f64] {
        if offset >= self.closes.len() {
            &[]
        } else {
            &self.closes[offset..]
        }
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = SeriesError;

    fn try_from(closes: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(closes)
    }
}

impl From<PriceSeries> for Vec<f64> {
    fn from(series: PriceSeries) -> Self {
        series.closes
    }
}
