//! Insertion: build a population from initial per-state counts.
//!
//! # Usage
//!
//! ```rust
//! use arbo_agent::{HumanState, PopulationBuilder};
//! use arbo_core::{AgentId, HumanCounts, NodeId};
//! use arbo_env::Environment;
//!
//! let env = Environment::isolated(4);
//! let counts = HumanCounts { susceptible: 3, infected: 1, ..Default::default() };
//! let humans = PopulationBuilder::humans(&counts)
//!     .place(AgentId(3), NodeId(2))
//!     .build(&env, 42)
//!     .unwrap();
//!
//! assert_eq!(humans.len(), 4);
//! assert_eq!(humans.get(AgentId(3)).state(), HumanState::Infected);
//! assert_eq!(humans.get(AgentId(3)).position(), NodeId(2));
//! ```

use arbo_core::{AgentId, Cycle, DrawRng, HumanCounts, MosquitoCounts, NodeId, Phase, Species};
use arbo_env::Environment;

use crate::{Agent, AgentError, AgentResult, DiseaseState, HumanState, MosquitoState, Population};

/// Initial node of agent `id`, uniform over `[0, size)`.
///
/// Returns `NodeId::INVALID` when `size == 0`.
#[inline]
pub fn insertion_position(seed: u64, species: Species, id: AgentId, size: usize) -> NodeId {
    DrawRng::for_agent(seed, species, id, Cycle::ZERO, Phase::Insertion)
        .pick(size)
        .map_or(NodeId::INVALID, |i| NodeId(i as u32))
}

/// Fluent builder for a [`Population`].
///
/// Groups are laid out in call order, so each group occupies one contiguous
/// id block.
pub struct PopulationBuilder<S> {
    groups:     Vec<(S, usize)>,
    placements: Vec<(AgentId, NodeId)>,
}

impl<S> Default for PopulationBuilder<S> {
    fn default() -> Self {
        Self { groups: Vec::new(), placements: Vec::new() }
    }
}

impl PopulationBuilder<HumanState> {
    /// Groups in S, E, I, R order.
    pub fn humans(counts: &HumanCounts) -> Self {
        Self::new()
            .group(HumanState::Susceptible, counts.susceptible)
            .group(HumanState::Exposed, counts.exposed)
            .group(HumanState::Infected, counts.infected)
            .group(HumanState::Recovered, counts.recovered)
    }
}

impl PopulationBuilder<MosquitoState> {
    /// Groups in S, I, R order.
    pub fn mosquitos(counts: &MosquitoCounts) -> Self {
        Self::new()
            .group(MosquitoState::Susceptible, counts.susceptible)
            .group(MosquitoState::Infected, counts.infected)
            .group(MosquitoState::Recovered, counts.recovered)
    }
}

impl<S: DiseaseState> PopulationBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` agents starting in `state`.
    pub fn group(mut self, state: S, count: usize) -> Self {
        if count > 0 {
            self.groups.push((state, count));
        }
        self
    }

    /// Pin agent `id` to `node` instead of drawing its position.
    ///
    /// Ids past the end of the population are ignored.
    pub fn place(mut self, id: AgentId, node: NodeId) -> Self {
        self.placements.push((id, node));
        self
    }

    /// Total number of agents the builder will create.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|&(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Agents with their states assigned and every position
    /// `NodeId::INVALID`.  The simulation fills the positions in its
    /// Insertion phase.
    pub fn build_unplaced(&self) -> AgentResult<Population<S>> {
        let len = self.len();
        if len >= u32::MAX as usize {
            return Err(AgentError::TooLarge { species: S::SPECIES, count: len });
        }
        let mut agents = Vec::with_capacity(len);
        for &(state, count) in &self.groups {
            agents.extend(std::iter::repeat_n(Agent::new(state, NodeId::INVALID), count));
        }
        Ok(Population::from_agents(agents))
    }

    /// Build the population, drawing each position uniformly over `env`.
    pub fn build(self, env: &Environment, seed: u64) -> AgentResult<Population<S>> {
        let mut population = self.build_unplaced()?;
        if env.is_empty() && !population.is_empty() {
            return Err(AgentError::EmptyEnvironment {
                species: S::SPECIES,
                count:   population.len(),
            });
        }

        let size = env.size();
        for (i, agent) in population.agents_mut().iter_mut().enumerate() {
            agent.move_to(insertion_position(seed, S::SPECIES, AgentId(i as u32), size));
        }
        for &(id, node) in &self.placements {
            if id.index() < population.len() {
                population.get_mut(id).move_to(node);
            }
        }
        population.check_positions(env)?;

        log::debug!(
            "inserted {} {}(s) over {} nodes ({} pinned)",
            population.len(),
            S::SPECIES,
            size,
            self.placements.len(),
        );
        Ok(population)
    }
}
