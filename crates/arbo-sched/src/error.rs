use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("accelerator block size must be at least 1")]
    ZeroBlock,

    #[error("unknown backend {0:?} (expected serial, cpu or accelerator)")]
    UnknownBackend(String),
}

pub type SchedResult<T> = Result<T, SchedError>;
