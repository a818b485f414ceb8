//! Environment construction errors.
//!
//! A loader either returns a complete `Environment` or one of these; the
//! pipeline never sees a partially built graph.

use thiserror::Error;

use arbo_core::NodeId;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("edge references {node}, but the environment has {size} nodes")]
    NodeOutOfRange { node: NodeId, size: usize },

    #[error("too many edges for u32 offsets: {0}")]
    TooManyEdges(usize),

    #[error("malformed geometry in feature {feature}: {reason}")]
    MalformedGeometry { feature: usize, reason: String },

    #[error("line endpoint ({x}, {y}) in feature {feature} matches no point")]
    DanglingEndpoint { feature: usize, x: f64, y: f64 },

    #[error("point id {0} appears more than once")]
    DuplicatePoint(u64),

    #[cfg(feature = "geojson")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EnvResult<T> = Result<T, EnvError>;
