//! Dwell-time transitions.
//!
//! No randomness: an agent leaves a state once its counter reaches the
//! state's threshold.  Susceptible has no threshold and only changes through
//! Contact.

use arbo_core::{HumanThresholds, MosquitoThresholds};

use crate::{Agent, DiseaseState, HumanState, MosquitoState};

/// Per-state threshold table of one species.
pub trait TransitionRule<S: DiseaseState>: Sync {
    /// Threshold of `state` and its successor, or `None` if `state` never
    /// changes on its own.
    fn next(&self, state: S) -> Option<(u32, S)>;
}

impl TransitionRule<HumanState> for HumanThresholds {
    fn next(&self, state: HumanState) -> Option<(u32, HumanState)> {
        match state {
            HumanState::Susceptible => None,
            HumanState::Exposed     => Some((self.exposed, HumanState::Infected)),
            HumanState::Infected    => Some((self.infected, HumanState::Recovered)),
            HumanState::Recovered   => Some((self.recovered, HumanState::Susceptible)),
        }
    }
}

impl TransitionRule<MosquitoState> for MosquitoThresholds {
    fn next(&self, state: MosquitoState) -> Option<(u32, MosquitoState)> {
        match state {
            MosquitoState::Susceptible => None,
            MosquitoState::Infected    => Some((self.infected, MosquitoState::Recovered)),
            MosquitoState::Recovered   => Some((self.recovered, MosquitoState::Susceptible)),
        }
    }
}

/// Advance one agent by one Transition phase.  Returns `true` when the
/// agent changed state.
///
/// An agent that Contact changed this cycle keeps counter 0 and only has its
/// flag cleared.  Everyone else ticks, then moves on if the counter has
/// reached the threshold.
#[inline]
pub fn step<S, R>(rule: &R, agent: &mut Agent<S>) -> bool
where
    S: DiseaseState,
    R: TransitionRule<S> + ?Sized,
{
    if agent.take_changed() {
        return false;
    }
    agent.tick();
    match rule.next(agent.state()) {
        Some((threshold, successor)) if agent.counter() >= threshold => {
            agent.reset_to(successor);
            true
        }
        _ => false,
    }
}
