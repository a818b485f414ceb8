//! `arbo-core` — foundational types for the `arbosim` workspace.
//!
//! Every other `arbo-*` crate depends on this one.  It has no `arbo-*`
//! dependencies and only two external ones (`rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `NodeId`                                       |
//! | [`cycle`]   | `Cycle`, `Progress`                                       |
//! | [`phase`]   | `Phase`, `Species`                                        |
//! | [`rng`]     | `DrawRng` (keyed per agent/cycle/phase), `SimRng`         |
//! | [`params`]  | `Parameters`, initial counts, dwell thresholds            |
//! | [`error`]   | `ArboError`, `ArboResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cycle;
pub mod error;
pub mod ids;
pub mod params;
pub mod phase;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cycle::{Cycle, Progress};
pub use error::{ArboError, ArboResult};
pub use ids::{AgentId, NodeId};
pub use params::{HumanCounts, HumanThresholds, MosquitoCounts, MosquitoThresholds, Parameters};
pub use phase::{Phase, Species};
pub use rng::{DrawRng, SimRng, derive_seed};
