//! # taskpool
//!
//! **taskpool** is a small thread pool for running blocking work in the
//! background: submit a closure, get a [`TaskHandle`] back immediately, then
//! poll its [`Status`] or fetch its result once it is ready.
//!
//! It is built around a few simple rules:
//!
//! - Tasks are **dispatched in submission order** through a single claim
//!   cursor. Completion order is free.
//! - Worker threads are **spawned lazily**, one per submission while no worker
//!   is idle, up to a configured maximum.
//! - Every task status and result lives in one **append-only registry**
//!   guarded by one lock that is never held while a task runs.
//! - A task that panics is recorded as [`Status::Failed`]; the worker
//!   survives.
//! - **Shutdown drains** the queue before joining the workers.
//!
//! ## Quick Start
//!
//! ```rust
//! use taskpool::{Status, TaskPool};
//!
//! let pool = TaskPool::with_threads(2).unwrap();
//!
//! let handles: Vec<_> = [1.5_f32, 2.5, 3.5]
//!     .into_iter()
//!     .map(|v| pool.submit(move || v * 2.0).unwrap())
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(pool.wait(handle).unwrap(), Status::Ready);
//!     println!("{handle}: {}", pool.result(handle).unwrap());
//! }
//! ```
//!
//! ## Logging
//!
//! The pool reports worker and task lifecycle events through [`tracing`].
//! No subscriber is installed by the crate.

mod error;
mod runtime;

pub use error::{PoolError, Result};
pub use runtime::builder::{
    DEFAULT_THREAD_NAME, DEFAULT_WORKER_THREADS, THREAD_NAME_ENV, WORKER_THREADS_ENV,
};
pub use runtime::task;
pub use runtime::task::{Job, Status, TaskHandle};
pub use runtime::{PoolBuilder, PoolStats, TaskPool};
