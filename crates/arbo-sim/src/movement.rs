//! Movement phase.

use arbo_agent::{Agent, DiseaseState};
use arbo_core::{AgentId, Cycle, DrawRng, Phase};
use arbo_env::Environment;
use arbo_index::DenseSlots;
use arbo_sched::Scheduler;

/// Step every agent to a uniformly drawn neighbor of its node.
///
/// A node without neighbors (or a position outside the environment) leaves
/// the agent where it is.  With a dense index the agent's slot is relocated
/// in the same pass.
pub(crate) fn step_all<S, D>(
    sched: &D,
    env: &Environment,
    seed: u64,
    cycle: Cycle,
    agents: &mut [Agent<S>],
    slots: Option<&DenseSlots>,
) where
    S: DiseaseState,
    D: Scheduler,
{
    sched.for_each_mut(agents, |i, agent| {
        let id = AgentId(i as u32);
        let from = agent.position();
        let neighbors = env.edges(from);
        let mut rng = DrawRng::for_agent(seed, S::SPECIES, id, cycle, Phase::Movement);
        if let Some(k) = rng.pick(neighbors.len()) {
            let to = neighbors[k];
            agent.move_to(to);
            if let Some(slots) = slots {
                slots.relocate(id, from, to);
            }
        }
    });
}
