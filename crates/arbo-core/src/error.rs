//! Core error type.
//!
//! Sub-crates define their own enums and wrap `ArboError` as one variant
//! where they need to surface parameter problems.

use thiserror::Error;

use crate::{NodeId, Species};

/// Errors raised while validating parameters or placing agents.
#[derive(Debug, Error)]
pub enum ArboError {
    #[error("node {node} outside environment of {size} nodes")]
    NodeOutOfRange { node: NodeId, size: usize },

    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("{species} population of {count} exceeds the u32 id space")]
    PopulationTooLarge { species: Species, count: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `arbo-core`.
pub type ArboResult<T> = Result<T, ArboError>;
