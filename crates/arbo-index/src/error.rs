use thiserror::Error;

use arbo_core::{AgentId, NodeId};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("dense index needs {nodes} x {population} slots, above the limit of {limit}")]
    TooLarge {
        nodes:      usize,
        population: usize,
        limit:      usize,
    },

    #[error("index disagrees with positions: {agent} at {node}")]
    Inconsistent { agent: AgentId, node: NodeId },

    #[error("unknown index strategy {0:?} (expected dense or compacted)")]
    UnknownStrategy(String),
}

pub type IndexResult<T> = Result<T, IndexError>;
