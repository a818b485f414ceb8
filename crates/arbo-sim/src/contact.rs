//! Contact phase.
//!
//! Pass 1 walks the buckets of every node and counts the infectious agents
//! of each species there.  Pass 2 walks the agents: a susceptible agent
//! reads its node's counts and draws from its own stream.  Pass 1 finishes
//! before pass 2 starts, so every draw sees pre-Contact states no matter how
//! the work is partitioned.

use arbo_agent::{Agent, DiseaseState, HumanState, MosquitoState};
use arbo_core::{AgentId, Cycle, DrawRng, NodeId, Phase};
use arbo_index::{Buckets, SpatialIndex};
use arbo_sched::Scheduler;

/// Infectious agents present at one node.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct NodeLoad {
    pub infected_humans:    u32,
    pub infected_mosquitos: u32,
}

fn infectious_at<S: DiseaseState>(buckets: &Buckets, node: NodeId, agents: &[Agent<S>]) -> u32 {
    buckets
        .at(node)
        .iter()
        .filter(|id| agents[id.index()].state().is_infectious())
        .count() as u32
}

/// Pass 1.
pub(crate) fn node_loads<D: Scheduler>(
    sched: &D,
    index: &SpatialIndex,
    humans: &[Agent<HumanState>],
    mosquitos: &[Agent<MosquitoState>],
) -> Vec<NodeLoad> {
    let nodes = index.humans.buckets().nodes();
    sched.map(nodes, |n| {
        let node = NodeId(n as u32);
        NodeLoad {
            infected_humans:    infectious_at(index.humans.buckets(), node, humans),
            infected_mosquitos: infectious_at(index.mosquitos.buckets(), node, mosquitos),
        }
    })
}

#[inline]
fn load_at(loads: &[NodeLoad], node: NodeId) -> NodeLoad {
    loads.get(node.index()).copied().unwrap_or_default()
}

/// Pass 2, humans: one draw against the infected mosquitos present.
pub(crate) fn expose_humans<D: Scheduler>(
    sched: &D,
    loads: &[NodeLoad],
    seed: u64,
    cycle: Cycle,
    rate: f64,
    humans: &mut [Agent<HumanState>],
) {
    sched.for_each_mut(humans, |i, human| {
        if !human.state().is_susceptible() {
            return;
        }
        let load = load_at(loads, human.position());
        if load.infected_mosquitos == 0 {
            return;
        }
        let mut rng = DrawRng::for_agent(seed, HumanState::SPECIES, AgentId(i as u32), cycle, Phase::Contact);
        if rng.chance(rate) {
            human.transmit_to(HumanState::ON_CONTACT);
        }
    });
}

/// Pass 2, mosquitos: first draw against infected humans, second against
/// infected mosquitos.  A susceptible mosquito is never among the infected
/// ones it counts, so self-pairs are excluded.
pub(crate) fn infect_mosquitos<D: Scheduler>(
    sched: &D,
    loads: &[NodeLoad],
    seed: u64,
    cycle: Cycle,
    rate: f64,
    mosquitos: &mut [Agent<MosquitoState>],
) {
    sched.for_each_mut(mosquitos, |i, mosquito| {
        if !mosquito.state().is_susceptible() {
            return;
        }
        let load = load_at(loads, mosquito.position());
        if load.infected_humans == 0 && load.infected_mosquitos == 0 {
            return;
        }
        let mut rng =
            DrawRng::for_agent(seed, MosquitoState::SPECIES, AgentId(i as u32), cycle, Phase::Contact);
        // Both draws are always taken so each has a fixed stream position.
        let from_human = rng.chance(rate);
        let from_mosquito = rng.chance(rate);
        if (load.infected_humans > 0 && from_human) || (load.infected_mosquitos > 0 && from_mosquito) {
            mosquito.transmit_to(MosquitoState::ON_CONTACT);
        }
    });
}
