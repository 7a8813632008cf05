//! Fork-join worker pool. Every phase hands the pool a fixed list of tasks and
//! returns only once all of them have finished.

use std::{num::NonZeroUsize, ops::Range, thread};

use rayon::prelude::*;

use crate::error::Result;

/// Logical processors available to this process, or 1 if that cannot be told.
pub fn cpu_count() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Cuts `0..len` into `parts` contiguous ranges. All ranges have `len / parts`
/// items except the last, which takes the remainder.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let per_part = len / parts;
    (0..parts)
        .map(|part| {
            let start = per_part * part;
            let end = if part == parts - 1 { len } else { start + per_part };
            start..end
        })
        .collect()
}

pub struct WorkerPool {
    pool: rayon::ThreadPool,
    threads: usize,
}

impl WorkerPool {
    pub fn new(threads: usize) -> Result<Self> {
        let threads = threads.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("five-five-{i}"))
            .build()?;
        Ok(WorkerPool { pool, threads })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Runs `task(worker, range)` for every range and waits for all of them.
    /// The first error wins; the remaining tasks may or may not have run.
    pub fn run<F>(&self, tasks: Vec<Range<usize>>, task: F) -> Result<()>
    where
        F: Fn(usize, Range<usize>) -> Result<()> + Sync,
    {
        self.pool.install(|| {
            tasks
                .into_par_iter()
                .enumerate()
                .try_for_each(|(worker, range)| task(worker, range))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn partition_covers_everything_once() {
        assert_eq!(partition(10, 3), vec![0..3, 3..6, 6..10]);
        assert_eq!(partition(2, 4), vec![0..0, 0..0, 0..0, 0..2]);
        assert_eq!(partition(0, 2), vec![0..0, 0..0]);
        assert_eq!(partition(5, 0), vec![0..5]);
    }

    #[test]
    fn run_joins_every_task() {
        let pool = WorkerPool::new(3).unwrap();
        let sum = AtomicUsize::new(0);
        pool.run(partition(100, pool.threads()), |_, range| {
            sum.fetch_add(range.sum::<usize>(), Ordering::Relaxed);
            Ok(())
        })
        .unwrap();
        assert_eq!(sum.into_inner(), (0..100).sum());
    }

    #[test]
    fn cpu_count_is_positive() {
        assert!(cpu_count() >= 1);
    }
}
