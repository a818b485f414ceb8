//! The `Simulation` struct and its cycle loop.

use std::time::{Duration, Instant};

use arbo_agent::{DiseaseState, Humans, Mosquitos, insertion_position};
use arbo_core::{AgentId, Cycle, Parameters, Phase, Progress};
use arbo_env::Environment;
use arbo_index::{IndexResult, SpatialIndex};
use arbo_sched::{Dispatcher, Scheduler};

use crate::{Peak, Retention, SimConfig, SimObserver, StateSnapshot, contact, movement, output, transition};

/// Pipeline position.
///
/// ```text
/// Created → Inserted → { Moving → Contacting → Transitioning → OutputReady }* → Finished
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Stage {
    Created,
    Inserted,
    Moving,
    Contacting,
    Transitioning,
    OutputReady,
    Finished,
}

/// Result of [`Simulation::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    pub seed:       u64,
    pub last:       StateSnapshot,
    pub peak:       Peak,
    /// Every snapshot from cycle 0, under [`Retention::Full`].
    pub trajectory: Option<Vec<StateSnapshot>>,
}

/// Wall time spent per phase in one cycle.
#[derive(Copy, Clone, Debug, Default)]
struct PhaseTimes {
    movement:   Duration,
    contact:    Duration,
    transition: Duration,
    output:     Duration,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// One independent run over a shared, read-only [`Environment`].
///
/// Create via [`SimBuilder`](crate::SimBuilder).  Drive it either with
/// [`run`](Self::run), or with [`prepare`](Self::prepare) followed by
/// repeated [`iterate`](Self::iterate) calls.
pub struct Simulation<'env> {
    env:        &'env Environment,
    params:     Parameters,
    config:     SimConfig,
    dispatcher: Dispatcher,

    humans:    Humans,
    mosquitos: Mosquitos,
    index:     SpatialIndex,

    /// Populations Insertion still has to place.
    insert_humans:    bool,
    insert_mosquitos: bool,

    stage:      Stage,
    /// Completed cycles.
    cycle:      Cycle,
    latest:     StateSnapshot,
    peak:       Peak,
    trajectory: Vec<StateSnapshot>,
}

impl<'env> Simulation<'env> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        env: &'env Environment,
        params: Parameters,
        config: SimConfig,
        dispatcher: Dispatcher,
        humans: Humans,
        mosquitos: Mosquitos,
        index: SpatialIndex,
        insert_humans: bool,
        insert_mosquitos: bool,
    ) -> Self {
        let latest = StateSnapshot {
            progress: Progress::new(0, params.cycles),
            ..StateSnapshot::default()
        };
        Self {
            env,
            params,
            config,
            dispatcher,
            humans,
            mosquitos,
            index,
            insert_humans,
            insert_mosquitos,
            stage: Stage::Created,
            cycle: Cycle::ZERO,
            latest,
            peak: Peak::default(),
            trajectory: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Number of completed cycles.
    #[inline]
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn environment(&self) -> &'env Environment {
        self.env
    }

    pub fn humans(&self) -> &Humans {
        &self.humans
    }

    pub fn mosquitos(&self) -> &Mosquitos {
        &self.mosquitos
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Latest snapshot (cycle 0 until the first `iterate`).
    pub fn latest(&self) -> &StateSnapshot {
        &self.latest
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }

    /// Check that the spatial index matches agent positions.
    pub fn verify_index(&self) -> IndexResult<()> {
        self.index.verify(self.humans.positions(), self.mosquitos.positions())
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Insertion: place agents, index them and return the cycle-0 snapshot.
    ///
    /// Idempotent: later calls return the latest snapshot unchanged.
    pub fn prepare(&mut self) -> StateSnapshot {
        if self.stage != Stage::Created {
            return self.latest;
        }

        let sched = self.dispatcher.for_phase(Phase::Insertion);
        let seed = self.params.seed;
        let size = self.env.size();
        let Self { humans, mosquitos, insert_humans, insert_mosquitos, .. } = self;
        sched.join(
            || {
                if *insert_humans {
                    place_all(&sched, seed, size, humans);
                }
            },
            || {
                if *insert_mosquitos {
                    place_all(&sched, seed, size, mosquitos);
                }
            },
        );
        self.insert_humans = false;
        self.insert_mosquitos = false;
        self.index.reset(&sched, self.humans.positions(), self.mosquitos.positions());

        self.stage = Stage::Inserted;
        let snapshot = self.census(Cycle::ZERO);
        log::debug!("inserted: {snapshot}");
        self.record(snapshot);
        if self.params.cycles == 0 {
            self.stage = Stage::Finished;
        }
        snapshot
    }

    /// Run exactly one cycle and return its snapshot, or `None` once all
    /// configured cycles have run.  Calls [`prepare`](Self::prepare) first
    /// if needed.
    pub fn iterate(&mut self) -> Option<StateSnapshot> {
        if self.stage == Stage::Created {
            self.prepare();
        }
        if self.cycle.0 >= self.params.cycles {
            self.stage = Stage::Finished;
            return None;
        }

        let cycle = self.cycle;
        let mut times = PhaseTimes::default();

        self.stage = Stage::Moving;
        let t = Instant::now();
        self.movement(cycle);
        times.movement = t.elapsed();

        self.stage = Stage::Contacting;
        let t = Instant::now();
        self.contact(cycle);
        times.contact = t.elapsed();

        self.stage = Stage::Transitioning;
        let t = Instant::now();
        self.transition();
        times.transition = t.elapsed();

        self.stage = Stage::OutputReady;
        let t = Instant::now();
        self.cycle = cycle.next();
        let snapshot = self.census(self.cycle);
        times.output = t.elapsed();

        log::trace!(
            "{cycle}: movement {:?}, contact {:?}, transition {:?}, output {:?}; {snapshot}",
            times.movement,
            times.contact,
            times.transition,
            times.output,
        );

        self.record(snapshot);
        if self.cycle.0 >= self.params.cycles {
            self.stage = Stage::Finished;
        }
        Some(snapshot)
    }

    /// Run every remaining cycle, reporting to `observer`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunOutcome {
        let started = Instant::now();
        log::info!(
            "run seed {}: {} cycles, {} humans, {} mosquitos on {} nodes",
            self.params.seed,
            self.params.cycles,
            self.humans.len(),
            self.mosquitos.len(),
            self.env.size(),
        );

        if self.stage == Stage::Created {
            let initial = self.prepare();
            observer.on_prepared(&initial);
        }
        while self.cycle.0 < self.params.cycles {
            observer.on_cycle_start(self.cycle);
            if let Some(snapshot) = self.iterate() {
                observer.on_snapshot(&snapshot);
            }
        }
        self.stage = Stage::Finished;
        observer.on_sim_end(&self.latest);

        log::info!("run seed {} finished in {:.2?}: {}", self.params.seed, started.elapsed(), self.latest);
        self.outcome()
    }

    /// Summary of the run so far.
    pub fn outcome(&self) -> RunOutcome {
        RunOutcome {
            seed:       self.params.seed,
            last:       self.latest,
            peak:       self.peak,
            trajectory: (self.config.retention == Retention::Full).then(|| self.trajectory.clone()),
        }
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn movement(&mut self, cycle: Cycle) {
        let sched = self.dispatcher.for_phase(Phase::Movement);
        let (env, seed) = (self.env, self.params.seed);
        let Self { humans, mosquitos, index, .. } = self;
        {
            let (h_slots, m_slots) = (index.humans.slots(), index.mosquitos.slots());
            sched.join(
                || movement::step_all(&sched, env, seed, cycle, humans.agents_mut(), h_slots),
                || movement::step_all(&sched, env, seed, cycle, mosquitos.agents_mut(), m_slots),
            );
        }
        // Barrier: Contact reads compacted buckets.
        index.refresh(&sched, humans.positions(), mosquitos.positions());
    }

    fn contact(&mut self, cycle: Cycle) {
        let sched = self.dispatcher.for_phase(Phase::Contact);
        let seed = self.params.seed;
        let (human_rate, mosquito_rate) = (self.params.human_infection_rate, self.params.mosquito_infection_rate);

        let loads = contact::node_loads(&sched, &self.index, self.humans.agents(), self.mosquitos.agents());

        let Self { humans, mosquitos, .. } = self;
        sched.join(
            || contact::expose_humans(&sched, &loads, seed, cycle, human_rate, humans.agents_mut()),
            || contact::infect_mosquitos(&sched, &loads, seed, cycle, mosquito_rate, mosquitos.agents_mut()),
        );
    }

    fn transition(&mut self) {
        let sched = self.dispatcher.for_phase(Phase::Transition);
        let Self { humans, mosquitos, params, .. } = self;
        let (h_rule, m_rule) = (&params.human_thresholds, &params.mosquito_thresholds);
        sched.join(
            || transition::advance_all(&sched, h_rule, humans.agents_mut()),
            || transition::advance_all(&sched, m_rule, mosquitos.agents_mut()),
        );
    }

    /// Output reduction, tagged with `completed` cycles.
    fn census(&self, completed: Cycle) -> StateSnapshot {
        let sched = self.dispatcher.for_phase(Phase::Output);
        let (h, m) = sched.join(
            || output::census(&sched, self.humans.agents()),
            || output::census(&sched, self.mosquitos.agents()),
        );
        StateSnapshot::from_counts(Progress::new(completed.0, self.params.cycles), h, m)
    }

    fn record(&mut self, snapshot: StateSnapshot) {
        debug_assert_eq!(snapshot.total_humans(), self.humans.len());
        debug_assert_eq!(snapshot.total_mosquitos(), self.mosquitos.len());
        self.latest = snapshot;
        self.peak.observe(&snapshot);
        if self.config.retention == Retention::Full {
            self.trajectory.push(snapshot);
        }
    }
}

/// Insertion of one population.
fn place_all<S, D>(sched: &D, seed: u64, size: usize, population: &mut arbo_agent::Population<S>)
where
    S: DiseaseState,
    D: Scheduler,
{
    sched.for_each_mut(population.agents_mut(), |i, agent| {
        agent.move_to(insertion_position(seed, S::SPECIES, AgentId(i as u32), size));
    });
}
