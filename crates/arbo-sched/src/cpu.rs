//! CPU thread-pool backend.
//!
//! Static partition: a slice of `n` elements is cut into one contiguous
//! `[start, start + n / workers)` range per worker (the last may be
//! shorter).  The pool is private to the scheduler so runs sharing a process
//! do not contend on Rayon's global pool.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{Backend, SchedResult, Scheduler, chunked};

pub struct CpuScheduler {
    pool: ThreadPool,
}

impl CpuScheduler {
    /// Pool of `num_threads` workers, or one per logical core when `None`.
    pub fn new(num_threads: Option<usize>) -> SchedResult<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads.unwrap_or(0))
            .thread_name(|i| format!("arbo-cpu-{i}"))
            .build()?;
        log::debug!("cpu scheduler: {} worker(s)", pool.current_num_threads());
        Ok(Self { pool })
    }

    /// Elements per worker for a slice of `len`.
    #[inline]
    fn chunk(&self, len: usize) -> usize {
        len.div_ceil(self.workers()).max(1)
    }
}

impl Scheduler for CpuScheduler {
    fn backend(&self) -> Backend {
        Backend::Cpu
    }

    fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn for_each_mut<T, F>(&self, items: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        let chunk = self.chunk(items.len());
        chunked::for_each_mut(&self.pool, items, chunk, f);
    }

    fn map<T, F>(&self, count: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync,
    {
        chunked::map(&self.pool, count, self.chunk(count), f)
    }

    fn fold<T, A, I, F, R>(&self, items: &[T], identity: I, fold: F, reduce: R) -> A
    where
        T: Sync,
        A: Send,
        I: Fn() -> A + Sync,
        F: Fn(A, usize, &T) -> A + Sync,
        R: Fn(A, A) -> A + Sync,
    {
        chunked::fold(&self.pool, items, self.chunk(items.len()), identity, fold, reduce)
    }

    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        self.pool.join(a, b)
    }
}
