//! Simulation time: a plain cycle counter.
//!
//! One cycle is one full pass Movement → Contact → Transition → Output.
//! There is no wall-clock mapping; dwell thresholds are expressed in cycles.

use std::fmt;

/// Zero-based index of a simulation cycle.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cycle(pub u64);

impl Cycle {
    pub const ZERO: Cycle = Cycle(0);

    #[inline]
    pub fn next(self) -> Cycle {
        Cycle(self.0 + 1)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// `(completed cycles, total cycles)` carried by every snapshot.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub current: u64,
    pub total:   u64,
}

impl Progress {
    pub fn new(current: u64, total: u64) -> Self {
        Self { current, total }
    }

    #[inline]
    pub fn is_complete(self) -> bool {
        self.current >= self.total
    }

    /// Completed fraction in `[0, 1]`; a zero-cycle run counts as complete.
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            (self.current.min(self.total) as f64) / self.total as f64
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}
