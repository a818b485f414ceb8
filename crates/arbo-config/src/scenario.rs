//! Scenario schema and range resolution.

use std::path::Path;

use serde::Deserialize;

use arbo_core::{
    HumanCounts, HumanThresholds, MosquitoCounts, MosquitoThresholds, Parameters, SimRng,
};

use crate::{ConfigError, ConfigResult};

/// A scalar, or an inclusive `[lo, hi]` range to draw from.
#[derive(Copy, Clone, PartialEq, Debug, Deserialize)]
#[serde(untagged)]
pub enum Ranged<T> {
    Scalar(T),
    Range([T; 2]),
}

impl Ranged<u64> {
    pub fn resolve(self, key: &'static str, rng: &mut SimRng) -> ConfigResult<u64> {
        match self {
            Ranged::Scalar(v) => Ok(v),
            Ranged::Range([lo, hi]) if lo <= hi => Ok(rng.between_u64(lo, hi)),
            Ranged::Range([lo, hi]) => Err(ConfigError::InvalidRange { key, lo: lo as f64, hi: hi as f64 }),
        }
    }
}

impl Ranged<f64> {
    pub fn resolve(self, key: &'static str, rng: &mut SimRng) -> ConfigResult<f64> {
        match self {
            Ranged::Scalar(v) => Ok(v),
            Ranged::Range([lo, hi]) if lo <= hi => Ok(rng.between_f64(lo, hi)),
            Ranged::Range([lo, hi]) => Err(ConfigError::InvalidRange { key, lo, hi }),
        }
    }
}

/// Scenario file as written, before range resolution.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub runs: Option<Ranged<u64>>,
    pub cycles: Ranged<u64>,
    #[serde(default)]
    pub seed: Option<u64>,

    pub human_infection_rate:              Ranged<f64>,
    pub human_initial_susceptible:         Ranged<u64>,
    pub human_initial_exposed:             Ranged<u64>,
    pub human_initial_infected:            Ranged<u64>,
    pub human_initial_recovered:           Ranged<u64>,
    pub human_transition_period_exposed:   Ranged<u64>,
    pub human_transition_period_infected:  Ranged<u64>,
    pub human_transition_period_recovered: Ranged<u64>,

    pub mosquito_infection_rate:              Ranged<f64>,
    pub mosquito_initial_susceptible:         Ranged<u64>,
    pub mosquito_initial_infected:            Ranged<u64>,
    pub mosquito_initial_recovered:           Ranged<u64>,
    pub mosquito_transition_period_infected:  Ranged<u64>,
    pub mosquito_transition_period_recovered: Ranged<u64>,
}

/// A scenario with every range drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedScenario {
    /// Monte Carlo repetitions.
    pub runs:   u64,
    pub params: Parameters,
}

impl Scenario {
    pub fn from_json(data: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Draw every range and validate the result.
    pub fn resolve(&self) -> ConfigResult<ResolvedScenario> {
        let seed = self.seed.unwrap_or(0);
        let mut rng = SimRng::new(seed);
        let r = &mut rng;

        let runs = self.runs.unwrap_or(Ranged::Scalar(1)).resolve("runs", r)?;
        let cycles = self.cycles.resolve("cycles", r)?;

        let human_infection_rate = rate("human_infection_rate", self.human_infection_rate, r)?;
        let humans = HumanCounts {
            susceptible: count("human_initial_susceptible", self.human_initial_susceptible, r)?,
            exposed:     count("human_initial_exposed", self.human_initial_exposed, r)?,
            infected:    count("human_initial_infected", self.human_initial_infected, r)?,
            recovered:   count("human_initial_recovered", self.human_initial_recovered, r)?,
        };
        let human_thresholds = HumanThresholds {
            exposed:   period("human_transition_period_exposed", self.human_transition_period_exposed, r)?,
            infected:  period("human_transition_period_infected", self.human_transition_period_infected, r)?,
            recovered: period("human_transition_period_recovered", self.human_transition_period_recovered, r)?,
        };

        let mosquito_infection_rate = rate("mosquito_infection_rate", self.mosquito_infection_rate, r)?;
        let mosquitos = MosquitoCounts {
            susceptible: count("mosquito_initial_susceptible", self.mosquito_initial_susceptible, r)?,
            infected:    count("mosquito_initial_infected", self.mosquito_initial_infected, r)?,
            recovered:   count("mosquito_initial_recovered", self.mosquito_initial_recovered, r)?,
        };
        let mosquito_thresholds = MosquitoThresholds {
            infected:  period("mosquito_transition_period_infected", self.mosquito_transition_period_infected, r)?,
            recovered: period("mosquito_transition_period_recovered", self.mosquito_transition_period_recovered, r)?,
        };

        let params = Parameters {
            seed,
            cycles,
            human_infection_rate,
            mosquito_infection_rate,
            humans,
            mosquitos,
            human_thresholds,
            mosquito_thresholds,
        };
        params.validate()?;

        log::debug!(
            "resolved scenario: {runs} run(s), {cycles} cycles, {} humans, {} mosquitos",
            params.human_population(),
            params.mosquito_population(),
        );
        Ok(ResolvedScenario { runs, params })
    }
}

fn rate(key: &'static str, value: Ranged<f64>, rng: &mut SimRng) -> ConfigResult<f64> {
    let v = value.resolve(key, rng)?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(ConfigError::InvalidRate { key, value: v })
    }
}

fn count(key: &'static str, value: Ranged<u64>, rng: &mut SimRng) -> ConfigResult<usize> {
    let v = value.resolve(key, rng)?;
    usize::try_from(v).map_err(|_| ConfigError::TooLarge { key, value: v, max: usize::MAX as u64 })
}

fn period(key: &'static str, value: Ranged<u64>, rng: &mut SimRng) -> ConfigResult<u32> {
    let v = value.resolve(key, rng)?;
    u32::try_from(v).map_err(|_| ConfigError::TooLarge { key, value: v, max: u32::MAX as u64 })
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Read, parse and resolve a scenario file.
pub fn load_scenario(path: &Path) -> ConfigResult<ResolvedScenario> {
    let data = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    load_scenario_str(&data)
}

pub fn load_scenario_str(data: &str) -> ConfigResult<ResolvedScenario> {
    Scenario::from_json(data)?.resolve()
}
