use super::builder::{DEFAULT_THREAD_NAME, default_worker_threads};
use super::executor::core::Executor;
use super::pool::PoolStats;
use super::task::{Job, Status, TaskHandle};
use crate::error::Result;

/// A pool of lazily spawned worker threads executing submitted tasks.
///
/// `TaskPool` is responsible for:
/// - accepting jobs and handing back a [`TaskHandle`] immediately,
/// - dispatching jobs to workers strictly in submission order,
/// - reporting task status and returning stored results,
/// - draining queued work and joining its workers on shutdown.
///
/// `T` is the value produced by every task. A pool of tasks that produce
/// nothing is a `TaskPool<()>`.
///
/// Dropping the pool performs a blocking [`shutdown`](Self::shutdown).
///
/// # Examples
///
/// ```rust
/// use taskpool::{Status, TaskPool};
///
/// let pool = TaskPool::with_threads(2).unwrap();
/// let handle = pool.submit_with(|n: u64| n * 2, 21).unwrap();
///
/// assert_eq!(pool.wait(handle).unwrap(), Status::Ready);
/// assert_eq!(pool.result(handle).unwrap(), 42);
/// ```
pub struct TaskPool<T: Send + 'static> {
    executor: Executor<T>,
}

impl<T: Send + 'static> TaskPool<T> {
    /// Creates a pool sized to the host parallelism.
    pub fn new() -> Self {
        Self::from_parts(default_worker_threads(), DEFAULT_THREAD_NAME.to_string())
    }

    /// Creates a pool that may grow to `threads` workers.
    ///
    /// Fails with [`PoolError::Configuration`](crate::PoolError::Configuration)
    /// if `threads` is zero.
    pub fn with_threads(threads: usize) -> Result<Self> {
        super::PoolBuilder::new().worker_threads(threads).build()
    }

    pub(crate) fn from_parts(max_workers: usize, thread_name: String) -> Self {
        Self {
            executor: Executor::new(max_workers, thread_name),
        }
    }

    /// Submits a task and returns its handle without waiting for it to run.
    ///
    /// Fails with [`PoolError::PoolClosed`](crate::PoolError::PoolClosed)
    /// once shutdown has begun.
    pub fn submit<F>(&self, task: F) -> Result<TaskHandle>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        self.executor.submit(Box::new(task))
    }

    /// Submits a task whose arguments are bound now and passed on execution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskpool::TaskPool;
    ///
    /// let pool = TaskPool::with_threads(1).unwrap();
    /// let handle = pool
    ///     .submit_with(|(s, c): (String, char)| format!("{s}{c}"), ("ok".to_string(), 'a'))
    ///     .unwrap();
    ///
    /// pool.wait(handle).unwrap();
    /// assert_eq!(pool.result(handle).unwrap(), "oka");
    /// ```
    pub fn submit_with<F, A>(&self, task: F, args: A) -> Result<TaskHandle>
    where
        F: FnOnce(A) -> T + Send + 'static,
        A: Send + 'static,
    {
        self.submit(move || task(args))
    }

    /// Submits an already boxed job.
    ///
    /// A missing job is rejected with [`TaskHandle::INVALID`] rather than
    /// an error, and nothing is queued.
    pub fn submit_job(&self, job: Option<Job<T>>) -> Result<TaskHandle> {
        match job {
            Some(job) => self.executor.submit(job),
            None => Ok(TaskHandle::INVALID),
        }
    }

    /// Returns the current status of a task.
    pub fn status(&self, handle: TaskHandle) -> Result<Status> {
        self.executor.status(handle)
    }

    /// Returns a copy of the value produced by a task.
    ///
    /// Fails with `NotReady` until the task is `Ready`, and with
    /// `TaskFailed` if the task panicked.
    pub fn result(&self, handle: TaskHandle) -> Result<T>
    where
        T: Clone,
    {
        self.executor.result(handle)
    }

    /// Blocks until the task is `Ready` or `Failed` and returns that status.
    pub fn wait(&self, handle: TaskHandle) -> Result<Status> {
        self.executor.wait(handle)
    }

    /// Releases the stored outcome of a finished task.
    ///
    /// The handle stays valid and keeps reporting its terminal status, but
    /// [`result`](Self::result) fails with `Disposed` afterwards.
    ///
    /// Only heap data owned by the outcome is freed. The task record stays
    /// in the pool, so each submitted task keeps its inline footprint.
    pub fn dispose(&self, handle: TaskHandle) -> Result<()> {
        self.executor.dispose(handle)
    }

    /// Snapshot of worker and task counters.
    pub fn stats(&self) -> PoolStats {
        self.executor.stats()
    }

    /// Maximum number of worker threads this pool may create.
    pub fn max_workers(&self) -> usize {
        self.executor.max_workers()
    }

    /// Stops accepting tasks and blocks until every queued task has run and
    /// every worker thread has exited.
    ///
    /// Must not be called from inside a task of the same pool.
    pub fn shutdown(&self) {
        self.executor.shutdown();
    }
}

impl<T: Send + 'static> Default for TaskPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Drop for TaskPool<T> {
    /// Shuts down the pool, draining queued tasks first.
    fn drop(&mut self) {
        self.executor.shutdown();
    }
}
