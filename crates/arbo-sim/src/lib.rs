//! `arbo-sim` — the per-cycle pipeline.
//!
//! # Cycle
//!
//! ```text
//! prepare():   Insertion   — place agents uniformly, build the spatial index
//! per cycle:
//!   ① Movement   — every agent steps to a random neighbor (dead end: stays);
//!                  buckets refreshed before ②
//!   ② Contact    — pass 1 per node: count infectious agents;
//!                  pass 2 per agent: susceptibles draw against those counts
//!   ③ Transition — dwell counters tick; thresholds fire
//!   ④ Output     — count-by-state reduction → StateSnapshot
//! ```
//!
//! Every phase runs the human and the mosquito bulk operation under one
//! `join` and returns only when both have finished, so no phase ever sees
//! partial results of another.  Each phase picks its backend from the
//! [`SimConfig`] plan.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use arbo_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let mut sim = SimBuilder::new(&env, params, SimConfig::default()).build()?;
//! let outcome = sim.run(&mut NoopObserver);
//! println!("{}", outcome.last);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod monte_carlo;
pub mod observer;
pub mod sim;
pub mod snapshot;

mod contact;
mod movement;
mod output;
mod transition;


pub use builder::SimBuilder;
pub use config::{DEFAULT_DENSE_SLOT_LIMIT, Retention, SimConfig};
pub use error::{SimError, SimResult};
pub use monte_carlo::MonteCarlo;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunOutcome, Simulation, Stage};
pub use snapshot::{Peak, StateSnapshot};
