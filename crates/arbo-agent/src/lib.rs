//! `arbo-agent` — the two agent populations and their state machines.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`state`]      | `DiseaseState` trait, `HumanState`, `MosquitoState`        |
//! | [`agent`]      | `Agent<S>` — one agent's state, position and dwell counter |
//! | [`population`] | `Population<S>` — dense, fixed-size agent array            |
//! | [`builder`]    | `PopulationBuilder<S>` — insertion from initial counts     |
//! | [`transition`] | `TransitionRule`, threshold-driven `step`                  |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                             |
//!
//! # Ids
//!
//! An agent's `AgentId` is its index in the population array.  Ids are
//! assigned once at insertion and never reused or renumbered; the population
//! is never resized after construction.

pub mod agent;
pub mod builder;
pub mod error;
pub mod population;
pub mod state;
pub mod transition;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::{PopulationBuilder, insertion_position};
pub use error::{AgentError, AgentResult};
pub use population::{Humans, Mosquitos, Population};
pub use state::{DiseaseState, HumanState, MAX_STATES, MosquitoState, StateCounts};
pub use transition::{TransitionRule, step};
