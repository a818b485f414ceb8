use std::fmt;
use std::str::FromStr;

use crate::SchedError;

/// Execution backend of a bulk operation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Backend {
    /// Single thread, index order.
    Serial,
    /// Rayon pool with a static partition across hardware threads.
    #[default]
    Cpu,
    /// Software stand-in for a massively parallel device.
    Accelerator,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Serial      => "serial",
            Backend::Cpu         => "cpu",
            Backend::Accelerator => "accelerator",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serial"              => Ok(Backend::Serial),
            "cpu"                 => Ok(Backend::Cpu),
            "accelerator" | "gpu" => Ok(Backend::Accelerator),
            other => Err(SchedError::UnknownBackend(other.to_owned())),
        }
    }
}

/// Bulk data-parallel dispatch.
///
/// Every method blocks until all of its work has finished.  Closures receive
/// the element's index so callers can key random streams by id.  Results
/// never depend on how the index space is partitioned.
pub trait Scheduler: Sync {
    fn backend(&self) -> Backend;

    /// Execution units available to one call.
    fn workers(&self) -> usize;

    /// Call `f(i, &mut items[i])` for every element.  Each element is owned
    /// by exactly one execution unit for the duration of the call.
    fn for_each_mut<T, F>(&self, items: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync;

    /// `[f(0), f(1), …, f(count - 1)]`, in index order.
    fn map<T, F>(&self, count: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync;

    /// Reduce `items` with `fold` per partition and `reduce` across
    /// partitions.  `reduce` must be associative and `identity` its neutral
    /// element.
    fn fold<T, A, I, F, R>(&self, items: &[T], identity: I, fold: F, reduce: R) -> A
    where
        T: Sync,
        A: Send,
        I: Fn() -> A + Sync,
        F: Fn(A, usize, &T) -> A + Sync,
        R: Fn(A, A) -> A + Sync;

    /// Run two bulk operations, possibly concurrently, and wait for both.
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;
}
