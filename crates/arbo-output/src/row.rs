//! Flat rows written by every backend.

use arbo_sim::{RunOutcome, StateSnapshot};

/// State counts of one run after one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotRow {
    pub run:          u64,
    /// Completed cycles; 0 is the state right after insertion.
    pub cycle:        u64,
    pub total_cycles: u64,
    /// S, E, I, R.
    pub humans:       [u64; 4],
    /// S, I, R.
    pub mosquitos:    [u64; 3],
}

impl SnapshotRow {
    pub fn new(run: u64, snapshot: &StateSnapshot) -> Self {
        Self {
            run,
            cycle:        snapshot.progress.current,
            total_cycles: snapshot.progress.total,
            humans:       snapshot.humans.map(|n| n as u64),
            mosquitos:    snapshot.mosquitos.map(|n| n as u64),
        }
    }
}

/// One line per finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub run:                 u64,
    pub seed:                u64,
    pub cycles:              u64,
    pub final_humans:        [u64; 4],
    pub final_mosquitos:     [u64; 3],
    pub peak_human_infected: u64,
    pub peak_cycle:          u64,
}

impl RunSummaryRow {
    pub fn new(run: u64, outcome: &RunOutcome) -> Self {
        Self {
            run,
            seed:                outcome.seed,
            cycles:              outcome.last.progress.current,
            final_humans:        outcome.last.humans.map(|n| n as u64),
            final_mosquitos:     outcome.last.mosquitos.map(|n| n as u64),
            peak_human_infected: outcome.peak.infected_humans as u64,
            peak_cycle:          outcome.peak.cycle,
        }
    }
}

pub(crate) const HUMAN_COLUMNS: [&str; 4] =
    ["human_susceptible", "human_exposed", "human_infected", "human_recovered"];

pub(crate) const MOSQUITO_COLUMNS: [&str; 3] =
    ["mosquito_susceptible", "mosquito_infected", "mosquito_recovered"];
