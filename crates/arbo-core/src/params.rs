//! Epidemiological parameters of one run.
//!
//! `Parameters` is built by an external loader (see `arbo-config`) with any
//! ranges already resolved to single values.  It is read-only for the whole
//! run and shared by reference between phases.

use crate::{ArboError, ArboResult, Species};

/// Initial human counts per disease state.  Insertion assigns ids in this
/// field order: all susceptible first, then exposed, infected, recovered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HumanCounts {
    pub susceptible: usize,
    pub exposed:     usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl HumanCounts {
    pub fn total(&self) -> usize {
        self.susceptible
            .saturating_add(self.exposed)
            .saturating_add(self.infected)
            .saturating_add(self.recovered)
    }
}

/// Initial mosquito counts per disease state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MosquitoCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl MosquitoCounts {
    pub fn total(&self) -> usize {
        self.susceptible.saturating_add(self.infected).saturating_add(self.recovered)
    }
}

/// Cycles a human spends in a state before the automatic transition fires.
///
/// Exposed → Infected → Recovered → Susceptible (waning immunity).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HumanThresholds {
    pub exposed:   u32,
    pub infected:  u32,
    pub recovered: u32,
}

/// Cycles a mosquito spends in a state before the automatic transition fires.
///
/// Infected → Recovered → Susceptible.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MosquitoThresholds {
    pub infected:  u32,
    pub recovered: u32,
}

/// Everything the pipeline needs to know about the epidemiology of a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Master seed.  The same seed always reproduces the same trajectory.
    pub seed: u64,

    /// Number of cycles to simulate.
    pub cycles: u64,

    /// Probability that a susceptible human sharing a node with at least one
    /// infected mosquito becomes exposed in a cycle.
    pub human_infection_rate: f64,

    /// Probability that a susceptible mosquito is infected by an infected
    /// host (human, or another mosquito) sharing its node.
    pub mosquito_infection_rate: f64,

    pub humans:              HumanCounts,
    pub mosquitos:           MosquitoCounts,
    pub human_thresholds:    HumanThresholds,
    pub mosquito_thresholds: MosquitoThresholds,
}

impl Parameters {
    #[inline]
    pub fn human_population(&self) -> usize {
        self.humans.total()
    }

    #[inline]
    pub fn mosquito_population(&self) -> usize {
        self.mosquitos.total()
    }

    /// Check value ranges.  Called by the simulation builder before any
    /// allocation happens.
    pub fn validate(&self) -> ArboResult<()> {
        check_rate("human_infection_rate", self.human_infection_rate)?;
        check_rate("mosquito_infection_rate", self.mosquito_infection_rate)?;
        check_population(Species::Human, self.human_population())?;
        check_population(Species::Mosquito, self.mosquito_population())?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> ArboResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ArboError::InvalidRate { name, value })
    }
}

fn check_population(species: Species, count: usize) -> ArboResult<()> {
    // u32::MAX itself is the INVALID sentinel.
    if count < u32::MAX as usize {
        Ok(())
    } else {
        Err(ArboError::PopulationTooLarge { species, count })
    }
}
