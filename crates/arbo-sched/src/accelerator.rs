//! Accelerator backend (software stand-in).
//!
//! Models a device launch of one logical thread per element: the index
//! space is split into fixed-size blocks regardless of how many workers
//! exist, and blocks are scheduled onto a dedicated pool.  Only the launch
//! geometry differs from [`CpuScheduler`](crate::CpuScheduler); no device
//! API is involved.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{Backend, SchedError, SchedResult, Scheduler, chunked};

/// Default elements per block.
pub const DEFAULT_BLOCK: usize = 256;

pub struct AcceleratorScheduler {
    pool:  ThreadPool,
    block: usize,
}

impl AcceleratorScheduler {
    pub fn new(num_threads: Option<usize>, block: usize) -> SchedResult<Self> {
        if block == 0 {
            return Err(SchedError::ZeroBlock);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads.unwrap_or(0))
            .thread_name(|i| format!("arbo-accel-{i}"))
            .build()?;
        log::debug!(
            "accelerator scheduler: block {block}, {} worker(s)",
            pool.current_num_threads()
        );
        Ok(Self { pool, block })
    }

    #[inline]
    pub fn block(&self) -> usize {
        self.block
    }

    /// Number of blocks a launch over `len` elements uses.
    #[inline]
    pub fn grid(&self, len: usize) -> usize {
        len.div_ceil(self.block)
    }
}

impl Scheduler for AcceleratorScheduler {
    fn backend(&self) -> Backend {
        Backend::Accelerator
    }

    fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn for_each_mut<T, F>(&self, items: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        chunked::for_each_mut(&self.pool, items, self.block, f);
    }

    fn map<T, F>(&self, count: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync,
    {
        chunked::map(&self.pool, count, self.block, f)
    }

    fn fold<T, A, I, F, R>(&self, items: &[T], identity: I, fold: F, reduce: R) -> A
    where
        T: Sync,
        A: Send,
        I: Fn() -> A + Sync,
        F: Fn(A, usize, &T) -> A + Sync,
        R: Fn(A, A) -> A + Sync,
    {
        chunked::fold(&self.pool, items, self.block, identity, fold, reduce)
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
