//! Disease-state enumerations.
//!
//! Both enums are closed.  Mosquitos have no `Exposed` state, so the type
//! system rules out a mosquito ever being exposed.

use std::fmt::Debug;

use arbo_core::Species;

/// Largest number of states of any population.
pub const MAX_STATES: usize = 4;

/// Per-state counts indexed by [`DiseaseState::index`].  Entries at or past
/// `S::COUNT` are always zero.
pub type StateCounts = [usize; MAX_STATES];

/// Behaviour shared by [`HumanState`] and [`MosquitoState`].
pub trait DiseaseState: Copy + Eq + Debug + Send + Sync + 'static {
    const SPECIES: Species;
    /// Number of variants.
    const COUNT: usize;
    /// All variants in index order.
    const ALL: &'static [Self];
    const SUSCEPTIBLE: Self;
    /// State a susceptible agent enters through contact.
    const ON_CONTACT: Self;

    fn index(self) -> usize;

    fn label(self) -> &'static str;

    /// Can this agent pass the infection on?
    fn is_infectious(self) -> bool;

    #[inline]
    fn is_susceptible(self) -> bool {
        self == Self::SUSCEPTIBLE
    }
}

// ── Humans ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HumanState {
    #[default]
    Susceptible,
    Exposed,
    Infected,
    Recovered,
}

impl DiseaseState for HumanState {
    const SPECIES: Species = Species::Human;
    const COUNT: usize = 4;
    const ALL: &'static [Self] = &[
        HumanState::Susceptible,
        HumanState::Exposed,
        HumanState::Infected,
        HumanState::Recovered,
    ];
    const SUSCEPTIBLE: Self = HumanState::Susceptible;
    const ON_CONTACT: Self = HumanState::Exposed;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            HumanState::Susceptible => "susceptible",
            HumanState::Exposed     => "exposed",
            HumanState::Infected    => "infected",
            HumanState::Recovered   => "recovered",
        }
    }

    #[inline]
    fn is_infectious(self) -> bool {
        self == HumanState::Infected
    }
}

// ── Mosquitos ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MosquitoState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
}

impl DiseaseState for MosquitoState {
    const SPECIES: Species = Species::Mosquito;
    const COUNT: usize = 3;
    const ALL: &'static [Self] = &[
        MosquitoState::Susceptible,
        MosquitoState::Infected,
        MosquitoState::Recovered,
    ];
    const SUSCEPTIBLE: Self = MosquitoState::Susceptible;
    const ON_CONTACT: Self = MosquitoState::Infected;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            MosquitoState::Susceptible => "susceptible",
            MosquitoState::Infected    => "infected",
            MosquitoState::Recovered   => "recovered",
        }
    }

    #[inline]
    fn is_infectious(self) -> bool {
        self == MosquitoState::Infected
    }
}
