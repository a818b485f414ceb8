use thiserror::Error;

use arbo_core::{AgentId, NodeId, Species};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("cannot insert {count} {species}(s) into an environment with no nodes")]
    EmptyEnvironment { species: Species, count: usize },

    #[error("{species} {agent} is at {node}, outside environment of {size} nodes")]
    PositionOutOfRange {
        species: Species,
        agent:   AgentId,
        node:    NodeId,
        size:    usize,
    },

    #[error("{species} population of {count} exceeds the u32 id space")]
    TooLarge { species: Species, count: usize },
}

pub type AgentResult<T> = Result<T, AgentError>;
