//! Task records and their public identifiers.
//!
//! This module defines what the registry stores for each submission:
//! - the task record holding the job and, later, its outcome,
//! - the observable [`Status`] of a task,
//! - the opaque [`TaskHandle`] returned to callers.
//!
//! Workers never own task state. They take the job out of the record,
//! run it, and hand the outcome back to the registry.

pub(crate) mod core;
pub(crate) mod handle;
pub(crate) mod state;

pub(crate) use self::core::{Outcome, Task, execute};

pub use self::core::Job;
pub use handle::TaskHandle;
pub use state::Status;
