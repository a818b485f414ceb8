use std::path::PathBuf;

use clap::Parser;

use arbo_index::IndexStrategy;
use arbo_sched::{Backend, BackendPlan, DEFAULT_BLOCK};
use arbo_sim::{Retention, SimConfig};

#[derive(Debug, Parser)]
#[command(name = "arbosim", version, about)]
pub struct Cli {
    /// Environment graph: `.geojson`/`.json` (points and lines) or `.csv`
    /// (`from,to` edge list).
    #[arg(long, required_unless_present = "input_dir")]
    pub environment: Option<PathBuf>,

    /// Scenario file (JSON; numeric fields may be `[lo, hi]` ranges).
    #[arg(long, required_unless_present = "input_dir")]
    pub parameters: Option<PathBuf>,

    /// Run every scenario subdirectory of this directory instead.
    #[arg(long, conflicts_with_all = ["environment", "parameters"])]
    pub input_dir: Option<PathBuf>,

    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Overrides the scenario's `runs`.
    #[arg(long)]
    pub runs: Option<u64>,

    /// Overrides the scenario's `seed`.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads per pool (default: all cores).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Backend for every phase.
    #[arg(long, default_value_t = Backend::Cpu)]
    pub backend: Backend,

    #[arg(long, default_value_t = IndexStrategy::Compacted)]
    pub index: IndexStrategy,

    #[arg(long, default_value_t = DEFAULT_BLOCK)]
    pub accelerator_block: usize,

    /// Write every cycle; otherwise only cycle 0 and the last cycle.
    #[arg(long)]
    pub full_trajectory: bool,

    /// Log the state counts every N cycles (0 disables).
    #[arg(long, default_value_t = 0)]
    pub progress_every: u64,

    /// Also write `results.json` per run.
    #[arg(long)]
    pub json: bool,

    /// Also write `output.db`.
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    pub sqlite: bool,

    /// Only log warnings and errors (`RUST_LOG` still wins).
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            num_threads: self.threads,
            plan: BackendPlan::uniform(self.backend),
            index: self.index,
            retention: Retention::LatestOnly,
            accelerator_block: self.accelerator_block,
            ..SimConfig::default()
        }
    }
}
