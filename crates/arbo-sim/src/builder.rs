//! Fluent builder for constructing a [`Simulation`].

use arbo_agent::{AgentError, DiseaseState, Humans, Mosquitos, Population, PopulationBuilder};
use arbo_core::{Parameters, Phase};
use arbo_env::Environment;
use arbo_index::SpatialIndex;
use arbo_sched::Dispatcher;

use crate::{SimConfig, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs
///
/// | Method           | Default                                             |
/// |------------------|-----------------------------------------------------|
/// | `.humans(p)`     | Groups from `Parameters::humans`, placed by Insertion |
/// | `.mosquitos(p)`  | Groups from `Parameters::mosquitos`, placed by Insertion |
///
/// A supplied population keeps its positions and states as given; its
/// length must match the parameters.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&env, params, SimConfig::default())
///     .humans(humans)
///     .build()?;
/// ```
pub struct SimBuilder<'env> {
    env:       &'env Environment,
    params:    Parameters,
    config:    SimConfig,
    humans:    Option<Humans>,
    mosquitos: Option<Mosquitos>,
}

impl<'env> SimBuilder<'env> {
    pub fn new(env: &'env Environment, params: Parameters, config: SimConfig) -> Self {
        Self { env, params, config, humans: None, mosquitos: None }
    }

    /// Use a pre-built human population instead of Insertion.
    pub fn humans(mut self, humans: Humans) -> Self {
        self.humans = Some(humans);
        self
    }

    /// Use a pre-built mosquito population instead of Insertion.
    pub fn mosquitos(mut self, mosquitos: Mosquitos) -> Self {
        self.mosquitos = Some(mosquitos);
        self
    }

    /// Validate inputs, allocate populations, pools and index, and return a
    /// simulation in [`Stage::Created`](crate::Stage::Created).
    pub fn build(self) -> SimResult<Simulation<'env>> {
        self.params.validate()?;
        if self.config.num_threads == Some(0) {
            return Err(SimError::Config("num_threads must be at least 1".into()));
        }

        let env = self.env;
        let (humans, insert_humans) = resolve(
            env,
            self.humans,
            self.params.human_population(),
            "human population",
            || PopulationBuilder::humans(&self.params.humans),
        )?;
        let (mosquitos, insert_mosquitos) = resolve(
            env,
            self.mosquitos,
            self.params.mosquito_population(),
            "mosquito population",
            || PopulationBuilder::mosquitos(&self.params.mosquitos),
        )?;

        let dispatcher = Dispatcher::new(self.config.plan, self.config.pool_options())?;
        let index = SpatialIndex::new(
            self.config.index,
            env.size(),
            humans.positions(),
            mosquitos.positions(),
            self.config.dense_slot_limit,
            &dispatcher.for_phase(Phase::Insertion),
        )?;

        log::debug!(
            "built simulation: seed {}, {} cycles, {} humans, {} mosquitos, {} nodes, {} index",
            self.params.seed,
            self.params.cycles,
            humans.len(),
            mosquitos.len(),
            env.size(),
            self.config.index,
        );

        Ok(Simulation::new(
            env,
            self.params,
            self.config,
            dispatcher,
            humans,
            mosquitos,
            index,
            insert_humans,
            insert_mosquitos,
        ))
    }
}

/// Validate a supplied population, or lay out an unplaced one from counts.
/// The flag says whether Insertion still has to place it.
fn resolve<S, F>(
    env: &Environment,
    supplied: Option<Population<S>>,
    expected: usize,
    what: &'static str,
    from_counts: F,
) -> SimResult<(Population<S>, bool)>
where
    S: DiseaseState,
    F: FnOnce() -> PopulationBuilder<S>,
{
    match supplied {
        Some(p) => {
            if p.len() != expected {
                return Err(SimError::AgentCountMismatch { expected, got: p.len(), what });
            }
            p.check_positions(env)?;
            Ok((p, false))
        }
        None => {
            let p = from_counts().build_unplaced()?;
            if env.is_empty() && !p.is_empty() {
                return Err(AgentError::EmptyEnvironment { species: S::SPECIES, count: p.len() }.into());
            }
            Ok((p, true))
        }
    }
}
