use thiserror::Error;

use arbo_agent::AgentError;
use arbo_core::ArboError;
use arbo_index::IndexError;
use arbo_sched::SchedError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("invalid parameters: {0}")]
    Parameters(#[from] ArboError),

    #[error("{what} length {got} does not match configured population {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("dense index needs {nodes} x {population} slots, above the limit of {limit}")]
    IndexTooLarge {
        nodes:      usize,
        population: usize,
        limit:      usize,
    },

    #[error("scheduler error: {0}")]
    Scheduler(#[from] SchedError),
}

impl From<IndexError> for SimError {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::TooLarge { nodes, population, limit } => {
                SimError::IndexTooLarge { nodes, population, limit }
            }
            other => SimError::Config(other.to_string()),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
