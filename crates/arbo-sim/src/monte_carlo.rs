//! Independent repetitions of one scenario.

use arbo_core::{Parameters, derive_seed};
use arbo_env::Environment;

use crate::{NoopObserver, RunOutcome, SimBuilder, SimConfig, SimObserver, SimResult};

/// `runs` independent simulations sharing one environment.
///
/// Run `k` is seeded with `derive_seed(base_seed, k)`, so any single run can
/// be reproduced on its own with that seed.
#[derive(Copy, Clone, Debug)]
pub struct MonteCarlo {
    pub runs:      u64,
    pub base_seed: u64,
}

impl MonteCarlo {
    pub fn new(runs: u64, base_seed: u64) -> Self {
        Self { runs, base_seed }
    }

    #[inline]
    pub fn seed_for(&self, run: u64) -> u64 {
        derive_seed(self.base_seed, run)
    }

    /// Run all repetitions without observers.
    pub fn run(&self, env: &Environment, params: &Parameters, config: &SimConfig) -> SimResult<Vec<RunOutcome>> {
        self.run_with(env, params, config, |_| NoopObserver)
    }

    /// Run all repetitions; `observer_for(k)` supplies the observer of run
    /// `k`.
    pub fn run_with<O, F>(
        &self,
        env: &Environment,
        params: &Parameters,
        config: &SimConfig,
        mut observer_for: F,
    ) -> SimResult<Vec<RunOutcome>>
    where
        O: SimObserver,
        F: FnMut(u64) -> O,
    {
        let mut outcomes = Vec::with_capacity(self.runs as usize);
        for run in 0..self.runs {
            let seed = self.seed_for(run);
            log::info!("monte carlo run {}/{} (seed {seed})", run + 1, self.runs);

            let params = Parameters { seed, ..params.clone() };
            let mut sim = SimBuilder::new(env, params, config.clone()).build()?;
            let mut observer = observer_for(run);
            outcomes.push(sim.run(&mut observer));
        }
        Ok(outcomes)
    }
}
