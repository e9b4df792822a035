//! Error types returned by the pool.
//!
//! Every fallible operation on [`TaskPool`](crate::TaskPool) reports a
//! [`PoolError`]. Rejected submissions of a missing job are the one exception:
//! they are signaled through [`TaskHandle::INVALID`] rather than an error.

use crate::task::{Status, TaskHandle};

use std::io;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Errors produced by pool construction, submission and task queries.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// The pool was configured with zero worker threads.
    #[error("invalid worker thread count: {requested} (must be > 0)")]
    Configuration { requested: usize },

    /// The worker thread name prefix cannot be used as a thread name.
    #[error("invalid worker thread name {name:?}: contains a nul byte")]
    InvalidThreadName { name: String },

    /// The handle was never issued by this pool.
    #[error("unknown task handle: {handle}")]
    OutOfRange { handle: TaskHandle },

    /// The task has not reached a terminal status yet.
    #[error("task {handle} is not ready (status: {status})")]
    NotReady { handle: TaskHandle, status: Status },

    /// The task body panicked.
    #[error("task {handle} failed: {message}")]
    TaskFailed { handle: TaskHandle, message: String },

    /// The task's outcome was released with `dispose`.
    #[error("result of task {handle} was disposed")]
    Disposed { handle: TaskHandle },

    /// Shutdown has begun; no new work is accepted.
    #[error("pool is closed")]
    PoolClosed,

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker thread")]
    WorkerSpawn(#[source] io::Error),
}
