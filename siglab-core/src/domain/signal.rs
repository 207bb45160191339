//! Signal — a discrete trading instruction at one time index.

use serde::{Deserialize, Serialize};

/// One trading instruction: short, nothing, or long.
///
/// Wire representation (files, classifier outputs, FFI generators) is the
/// integer set {-1, 0, +1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Signal {
    Short,
    Flat,
    Long,
}

/// Aligned run of signals; same length convention as the price slice it is
/// paired with.
pub type SignalSequence = Vec<Signal>;

impl Signal {
    /// Decode a wire value. Anything outside {-1, 0, 1} is rejected.
    pub fn from_wire(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Signal::Short),
            0 => Some(Signal::Flat),
            1 => Some(Signal::Long),
            _ => None,
        }
    }

    pub fn to_wire(self) -> i8 {
        match self {
            Signal::Short => -1,
            Signal::Flat => 0,
            Signal::Long => 1,
        }
    }

    /// True for Long and Short; Flat never opens a position.
    pub fn is_entry(self) -> bool {
        self != Signal::Flat
    }
}

impl TryFrom<i8> for Signal {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Signal::from_wire(value).ok_or_else(|| format!("invalid signal value: {value}"))
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> Self {
        signal.to_wire()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        for v in [-1i8, 0, 1] {
            assert_eq!(Signal::from_wire(v).unwrap().to_wire(), v);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Signal::from_wire(2).is_none());
        assert!(Signal::from_wire(-2).is_none());
    }

    #[test]
    fn entry_classification() {
        assert!(Signal::Long.is_entry());
        assert!(Signal::Short.is_entry());
        assert!(!Signal::Flat.is_entry());
    }
}
