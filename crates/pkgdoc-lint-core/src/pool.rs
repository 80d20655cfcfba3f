//! Bounded worker pool for per-package checks.

use rayon::prelude::*;
use std::num::NonZeroUsize;

/// A fixed-size pool of worker threads.
///
/// Each worker runs one task to completion before taking the next. Results
/// come back in submission order regardless of which task finishes first.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Creates a pool with `workers` threads.
    ///
    /// # Errors
    ///
    /// Returns an error if the threads cannot be spawned.
    pub fn new(workers: NonZeroUsize) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|i| format!("pkgdoc-worker-{i}"))
            .build()?;
        Ok(Self { pool })
    }

    /// Returns the number of worker threads.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `task` over every input and returns the outputs indexed like
    /// `inputs`.
    ///
    /// Stops handing out new inputs once a task has failed and returns one of
    /// the errors.
    ///
    /// # Errors
    ///
    /// Returns the error of a failed task.
    pub fn run<T, R, E, F>(&self, inputs: &[T], task: F) -> Result<Vec<R>, E>
    where
        T: Sync,
        R: Send,
        E: Send,
        F: Fn(&T) -> Result<R, E> + Sync,
    {
        self.pool
            .install(|| inputs.par_iter().with_max_len(1).map(&task).collect())
    }
}

/// Host core count, or 1 if it cannot be determined.
#[must_use]
pub fn available_parallelism() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
