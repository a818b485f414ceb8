use std::path::PathBuf;

use thiserror::Error;

use arbo_core::ArboError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read scenario {path}: {source}")]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{key}: range [{lo}, {hi}] is empty")]
    InvalidRange { key: &'static str, lo: f64, hi: f64 },

    #[error("{key}: rate {value} outside [0, 1]")]
    InvalidRate { key: &'static str, value: f64 },

    #[error("{key}: {value} exceeds the maximum of {max}")]
    TooLarge { key: &'static str, value: u64, max: u64 },

    #[error(transparent)]
    Parameters(#[from] ArboError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
