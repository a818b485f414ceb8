//! Execution settings of a run.
//!
//! Epidemiology lives in [`Parameters`](arbo_core::Parameters); this struct
//! only decides *how* the pipeline executes.  Two runs with the same
//! parameters and different `SimConfig`s produce identical trajectories.

use arbo_index::IndexStrategy;
use arbo_sched::{BackendPlan, DEFAULT_BLOCK, PoolOptions};

/// Slot cap of the dense index (`nodes x population` per species).
pub const DEFAULT_DENSE_SLOT_LIMIT: usize = 1 << 28;

/// Which snapshots a run keeps.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Retention {
    /// Every snapshot from cycle 0 onwards.
    Full,
    /// Only the latest snapshot.
    #[default]
    LatestOnly,
}

#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Worker threads per pool.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Backend of each phase.
    pub plan: BackendPlan,

    pub index: IndexStrategy,

    pub retention: Retention,

    /// Elements per block on the accelerator backend.
    pub accelerator_block: usize,

    /// See [`DEFAULT_DENSE_SLOT_LIMIT`].
    pub dense_slot_limit: usize,
}

impl SimConfig {
    /// Single-threaded, everything else default.
    pub fn serial() -> Self {
        Self { plan: BackendPlan::uniform(arbo_sched::Backend::Serial), ..Self::default() }
    }

    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            num_threads:       self.num_threads,
            accelerator_block: self.accelerator_block,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_threads:       None,
            plan:              BackendPlan::default(),
            index:             IndexStrategy::default(),
            retention:         Retention::default(),
            accelerator_block: DEFAULT_BLOCK,
            dense_slot_limit:  DEFAULT_DENSE_SLOT_LIMIT,
        }
    }
}
