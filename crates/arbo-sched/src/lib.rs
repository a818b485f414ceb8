//! `arbo-sched` — bulk-parallel dispatch.
//!
//! Every phase of the pipeline is a data-parallel map over an index range.
//! A [`Scheduler`] runs one such map and returns only once all of it has
//! finished, so each call is a barrier.  Race freedom comes from handing
//! every execution unit a disjoint slice, never from locks.
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`scheduler`]   | `Backend`, the `Scheduler` trait                         |
//! | [`serial`]      | `SerialScheduler` — plain loops on the calling thread    |
//! | [`cpu`]         | `CpuScheduler` — Rayon pool, one chunk per worker        |
//! | [`accelerator`] | `AcceleratorScheduler` — fixed-size blocks, own pool     |
//! | [`dispatch`]    | `BackendPlan`, `Dispatcher`, `Dispatch`                  |
//! | [`error`]       | `SchedError`, `SchedResult<T>`                           |
//!
//! Methods are generic, so the backends are selected through the
//! [`Dispatch`] enum rather than a trait object.

pub mod accelerator;
pub mod cpu;
pub mod dispatch;
pub mod error;
pub mod scheduler;
pub mod serial;

mod chunked;

#[cfg(test)]
mod tests;

pub use accelerator::{AcceleratorScheduler, DEFAULT_BLOCK};
pub use cpu::CpuScheduler;
pub use dispatch::{BackendPlan, Dispatch, Dispatcher, PoolOptions};
pub use error::{SchedError, SchedResult};
pub use scheduler::{Backend, Scheduler};
pub use serial::SerialScheduler;
