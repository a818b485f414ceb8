//! Output phase: read-only count-by-state reduction.

use arbo_agent::{Agent, DiseaseState, StateCounts};
use arbo_sched::Scheduler;

pub(crate) fn census<S, D>(sched: &D, agents: &[Agent<S>]) -> StateCounts
where
    S: DiseaseState,
    D: Scheduler,
{
    sched.fold(
        agents,
        StateCounts::default,
        |mut acc, _, agent| {
            acc[agent.state().index()] += 1;
            acc
        },
        |mut a, b| {
            for (x, y) in a.iter_mut().zip(b) {
                *x += y;
            }
            a
        },
    )
}
