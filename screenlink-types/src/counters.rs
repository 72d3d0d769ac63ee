//! Counter report structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Counter values as last reported by the device.
///
/// The device owns the authoritative state; this struct only mirrors the
/// JSON report returned after a successful update.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    /// Left column tally
    pub left: u64,

    /// Right column tally
    pub right: u64,

    /// Shared ("both") column tally
    pub both: u64,
}

impl CounterSnapshot {
    pub fn new(left: u64, right: u64, both: u64) -> Self {
        Self { left, right, both }
    }
}

impl fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={} right={} both={}",
            self.left, self.right, self.both
        )
    }
}
