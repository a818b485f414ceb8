//! Dense agent arrays.

use std::ops::Range;

use arbo_core::{AgentId, NodeId};
use arbo_env::Environment;

use crate::{Agent, AgentError, AgentResult, DiseaseState, HumanState, MosquitoState, StateCounts};

/// All agents of one species, indexed by `AgentId`.
///
/// The length is fixed when the population is built.  Mutable access is
/// handed out as a slice, never as the backing `Vec`, so nothing downstream
/// can push or truncate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Population<S> {
    agents: Vec<Agent<S>>,
}

pub type Humans = Population<HumanState>;
pub type Mosquitos = Population<MosquitoState>;

impl<S: DiseaseState> Population<S> {
    pub(crate) fn from_agents(agents: Vec<Agent<S>>) -> Self {
        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline]
    pub fn get(&self, id: AgentId) -> &Agent<S> {
        &self.agents[id.index()]
    }

    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> &mut Agent<S> {
        &mut self.agents[id.index()]
    }

    #[inline]
    pub fn agents(&self) -> &[Agent<S>] {
        &self.agents
    }

    #[inline]
    pub fn agents_mut(&mut self) -> &mut [Agent<S>] {
        &mut self.agents
    }

    /// Contiguous id range `[start, end)`, clamped to the population.
    pub fn range(&self, range: Range<usize>) -> &[Agent<S>] {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        &self.agents[start..end]
    }

    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.len() as u32).map(AgentId)
    }

    /// Node of every agent, in id order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = NodeId> + Clone + Send + '_ {
        self.agents.iter().map(Agent::position)
    }

    /// Sequential count of agents per state.
    pub fn count_by_state(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for agent in &self.agents {
            counts[agent.state().index()] += 1;
        }
        counts
    }

    /// Fail on the first agent whose position lies outside `env`.
    pub fn check_positions(&self, env: &Environment) -> AgentResult<()> {
        match self.agents.iter().position(|a| !env.contains(a.position())) {
            None => Ok(()),
            Some(i) => Err(AgentError::PositionOutOfRange {
                species: S::SPECIES,
                agent:   AgentId(i as u32),
                node:    self.agents[i].position(),
                size:    env.size(),
            }),
        }
    }
}
