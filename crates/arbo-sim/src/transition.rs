//! Transition phase.

use arbo_agent::{Agent, DiseaseState, TransitionRule, step};
use arbo_sched::Scheduler;

/// Apply `rule` to every agent.
pub(crate) fn advance_all<S, R, D>(sched: &D, rule: &R, agents: &mut [Agent<S>])
where
    S: DiseaseState,
    R: TransitionRule<S>,
    D: Scheduler,
{
    sched.for_each_mut(agents, |_, agent| {
        step(rule, agent);
    });
}
