//! Chunked Rayon loops shared by the pooled backends.
//!
//! The slice is cut into consecutive `chunk`-sized pieces.  Each piece is one
//! Rayon task that walks its elements in order, so a piece is the unit of
//! ownership and `chunk` fixes the partition.

use rayon::ThreadPool;
use rayon::prelude::*;

pub(crate) fn for_each_mut<T, F>(pool: &ThreadPool, items: &mut [T], chunk: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    let chunk = chunk.max(1);
    pool.install(|| {
        items.par_chunks_mut(chunk).enumerate().for_each(|(c, part)| {
            let base = c * chunk;
            for (i, item) in part.iter_mut().enumerate() {
                f(base + i, item);
            }
        });
    });
}

pub(crate) fn map<T, F>(pool: &ThreadPool, count: usize, chunk: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let chunk = chunk.max(1);
    pool.install(|| (0..count).into_par_iter().with_min_len(chunk).map(&f).collect())
}

pub(crate) fn fold<T, A, I, F, R>(
    pool: &ThreadPool,
    items: &[T],
    chunk: usize,
    identity: I,
    fold: F,
    reduce: R,
) -> A
where
    T: Sync,
    A: Send,
    I: Fn() -> A + Sync,
    F: Fn(A, usize, &T) -> A + Sync,
    R: Fn(A, A) -> A + Sync,
{
    let chunk = chunk.max(1);
    pool.install(|| {
        items
            .par_chunks(chunk)
            .enumerate()
            .map(|(c, part)| {
                let base = c * chunk;
                part.iter()
                    .enumerate()
                    .fold(identity(), |acc, (i, item)| fold(acc, base + i, item))
            })
            .reduce(&identity, &reduce)
    })
}
