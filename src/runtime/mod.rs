//! Core pool components.
//!
//! This module contains the building blocks of the pool:
//! - the task registry with its FIFO claim cursor,
//! - the worker pool bookkeeping and lazy spawn policy,
//! - the signal used to park and wake idle workers,
//! - the executor and its worker threads,
//! - configuration via [`PoolBuilder`].
//!
//! Most users will interact with [`TaskPool`] rather than with these
//! components directly.

mod core;
mod executor;
mod pool;
mod registry;
mod signal;

pub(crate) mod builder;

pub mod task;

pub use self::core::TaskPool;
pub use builder::PoolBuilder;
pub use pool::PoolStats;
