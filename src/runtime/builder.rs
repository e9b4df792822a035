use super::TaskPool;
use crate::error::{PoolError, Result};

use std::thread;
use tracing::warn;

/// Worker limit used when the host parallelism cannot be determined.
pub const DEFAULT_WORKER_THREADS: usize = 4;

/// Default prefix of worker thread names.
pub const DEFAULT_THREAD_NAME: &str = "taskpool-worker";

/// Environment variable overriding the worker limit.
pub const WORKER_THREADS_ENV: &str = "TASKPOOL_WORKER_THREADS";

/// Environment variable overriding the worker thread name prefix.
pub const THREAD_NAME_ENV: &str = "TASKPOOL_THREAD_NAME";

/// Builder for configuring and creating a [`TaskPool`].
///
/// `PoolBuilder` allows customizing pool parameters before constructing the
/// pool. Validation is deferred to [`build`](Self::build), which reports an
/// invalid thread count as [`PoolError::Configuration`] and an unusable
/// thread name as [`PoolError::InvalidThreadName`].
///
/// # Examples
///
/// ```rust
/// use taskpool::{PoolBuilder, TaskPool};
///
/// let pool: TaskPool<u32> = PoolBuilder::new()
///     .worker_threads(4)
///     .thread_name("resize")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PoolBuilder {
    /// Maximum number of worker threads the pool may create.
    worker_threads: usize,

    /// Prefix of worker thread names.
    thread_name: String,
}

impl PoolBuilder {
    /// Creates a new `PoolBuilder` with default configuration.
    ///
    /// By default, the worker limit is the number of available logical CPUs,
    /// falling back to [`DEFAULT_WORKER_THREADS`] if unavailable.
    pub fn new() -> Self {
        Self {
            worker_threads: default_worker_threads(),
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }

    /// Creates a builder from defaults overridden by the process environment.
    ///
    /// Reads [`WORKER_THREADS_ENV`] and [`THREAD_NAME_ENV`]. A worker count
    /// that does not parse is ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut builder = Self::new();

        if let Some(raw) = lookup(WORKER_THREADS_ENV) {
            match raw.trim().parse() {
                Ok(n) => builder.worker_threads = n,
                Err(_) => warn!(
                    variable = WORKER_THREADS_ENV,
                    value = %raw,
                    "ignoring unparsable worker thread count"
                ),
            }
        }

        if let Some(name) = lookup(THREAD_NAME_ENV) {
            builder.thread_name = name;
        }

        builder
    }

    /// Sets the maximum number of worker threads.
    ///
    /// Zero is rejected when the pool is built.
    pub fn worker_threads(mut self, n: usize) -> Self {
        self.worker_threads = n;
        self
    }

    /// Sets the prefix used to name worker threads (`<prefix>-<index>`).
    ///
    /// A prefix containing a nul byte is rejected when the pool is built.
    pub fn thread_name(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name = prefix.into();
        self
    }

    /// Builds the pool with the configured options.
    ///
    /// No worker thread is started until the first submission.
    pub fn build<T: Send + 'static>(self) -> Result<TaskPool<T>> {
        if self.worker_threads == 0 {
            return Err(PoolError::Configuration {
                requested: self.worker_threads,
            });
        }

        if self.thread_name.contains('\0') {
            return Err(PoolError::InvalidThreadName {
                name: self.thread_name,
            });
        }

        Ok(TaskPool::from_parts(self.worker_threads, self.thread_name))
    }
}

impl Default for PoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Host parallelism, or [`DEFAULT_WORKER_THREADS`] if it cannot be queried.
pub(crate) fn default_worker_threads() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(DEFAULT_WORKER_THREADS)
}
