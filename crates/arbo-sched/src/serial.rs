use crate::{Backend, Scheduler};

/// Runs everything on the calling thread in index order.
///
/// Reference backend for determinism checks and single-threaded runs.
#[derive(Copy, Clone, Debug, Default)]
pub struct SerialScheduler;

impl Scheduler for SerialScheduler {
    fn backend(&self) -> Backend {
        Backend::Serial
    }

    fn workers(&self) -> usize {
        1
    }

    fn for_each_mut<T, F>(&self, items: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        for (i, item) in items.iter_mut().enumerate() {
            f(i, item);
        }
    }

    fn map<T, F>(&self, count: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync,
    {
        (0..count).map(f).collect()
    }

    fn fold<T, A, I, F, R>(&self, items: &[T], identity: I, fold: F, _reduce: R) -> A
    where
        T: Sync,
        A: Send,
        I: Fn() -> A + Sync,
        F: Fn(A, usize, &T) -> A + Sync,
        R: Fn(A, A) -> A + Sync,
    {
        items.iter().enumerate().fold(identity(), |acc, (i, item)| fold(acc, i, item))
    }

    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let ra = a();
        (ra, b())
    }
}
