//! Per-cycle output values.

use std::fmt;

use arbo_agent::{DiseaseState, HumanState, MosquitoState, StateCounts};
use arbo_core::Progress;

/// Population counts per disease state after a cycle.
///
/// `progress.current` is the number of completed cycles, so the snapshot
/// returned by `prepare()` has `current == 0`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StateSnapshot {
    pub progress:  Progress,
    /// S, E, I, R.
    pub humans:    [usize; 4],
    /// S, I, R.
    pub mosquitos: [usize; 3],
}

impl StateSnapshot {
    pub(crate) fn from_counts(progress: Progress, humans: StateCounts, mosquitos: StateCounts) -> Self {
        Self {
            progress,
            humans:    [humans[0], humans[1], humans[2], humans[3]],
            mosquitos: [mosquitos[0], mosquitos[1], mosquitos[2]],
        }
    }

    #[inline]
    pub fn cycle(&self) -> u64 {
        self.progress.current
    }

    #[inline]
    pub fn human(&self, state: HumanState) -> usize {
        self.humans[state.index()]
    }

    #[inline]
    pub fn mosquito(&self, state: MosquitoState) -> usize {
        self.mosquitos[state.index()]
    }

    pub fn infected_humans(&self) -> usize {
        self.human(HumanState::Infected)
    }

    pub fn infected_mosquitos(&self) -> usize {
        self.mosquito(MosquitoState::Infected)
    }

    pub fn total_humans(&self) -> usize {
        self.humans.iter().sum()
    }

    pub fn total_mosquitos(&self) -> usize {
        self.mosquitos.iter().sum()
    }
}

impl fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [hs, he, hi, hr] = self.humans;
        let [ms, mi, mr] = self.mosquitos;
        write!(
            f,
            "cycle {}: humans S={hs} E={he} I={hi} R={hr}, mosquitos S={ms} I={mi} R={mr}",
            self.progress
        )
    }
}

/// Largest infected-human count seen so far, and the first cycle it was
/// reached.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Peak {
    pub cycle:           u64,
    pub infected_humans: usize,
}

impl Peak {
    pub(crate) fn observe(&mut self, snapshot: &StateSnapshot) {
        if snapshot.infected_humans() > self.infected_humans {
            self.infected_humans = snapshot.infected_humans();
            self.cycle = snapshot.cycle();
        }
    }
}
