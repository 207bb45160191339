//! Strategy parameter values and assignments.
//!
//! Parameter spaces mix integer periods with float multipliers, so values
//! are a small typed enum rather than bare f64.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single candidate parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
}

/// A complete parameter assignment: every required name bound to a value.
pub type ParamSet = BTreeMap<String, ParamValue>;

impl ParamValue {
    pub fn as_f64(self) -> f64 {
        match self {
            ParamValue::Int(v) => v as f64,
            ParamValue::Float(v) => v,
        }
    }

    /// Interpret the value as a lookback period length.
    ///
    /// Negative values clamp to zero; floats truncate. Warm-up offsets are
    /// index counts and can never be fractional or negative.
    pub fn as_period(self) -> usize {
        match self {
            ParamValue::Int(v) => v.max(0) as usize,
            ParamValue::Float(v) => {
                if v.is_finite() && v > 0.0 {
                    v as usize
                } else {
                    0
                }
            }
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_conversion() {
        assert_eq!(ParamValue::Int(26).as_period(), 26);
        assert_eq!(ParamValue::Int(-3).as_period(), 0);
        assert_eq!(ParamValue::Float(8.5).as_period(), 8);
        assert_eq!(ParamValue::Float(-1.0).as_period(), 0);
        assert_eq!(ParamValue::Float(f64::NAN).as_period(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(ParamValue::Int(54).to_string(), "54");
        assert_eq!(ParamValue::Float(8.5).to_string(), "8.5");
    }
}
