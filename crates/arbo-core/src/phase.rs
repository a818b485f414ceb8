//! Phase and species tags.
//!
//! Both are mixed into every random draw key so that the same agent id in
//! the two populations, or the same agent in two phases, never shares a
//! random stream.

use std::fmt;

/// One bulk-parallel step of the per-cycle pipeline.
///
/// `Insertion` runs once before the first cycle; the other four run once per
/// cycle in declaration order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Insertion,
    Movement,
    Contact,
    Transition,
    Output,
}

impl Phase {
    /// The per-cycle phases in execution order.
    pub const CYCLE: [Phase; 4] = [Phase::Movement, Phase::Contact, Phase::Transition, Phase::Output];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Insertion  => "insertion",
            Phase::Movement   => "movement",
            Phase::Contact    => "contact",
            Phase::Transition => "transition",
            Phase::Output     => "output",
        }
    }

    #[inline]
    pub(crate) fn salt(self) -> u64 {
        match self {
            Phase::Insertion  => 1,
            Phase::Movement   => 2,
            Phase::Contact    => 3,
            Phase::Transition => 4,
            Phase::Output     => 5,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two agent populations an id belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Human,
    Mosquito,
}

impl Species {
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Human    => "human",
            Species::Mosquito => "mosquito",
        }
    }

    #[inline]
    pub(crate) fn salt(self) -> u64 {
        match self {
            Species::Human    => 0x68,
            Species::Mosquito => 0x6d,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
