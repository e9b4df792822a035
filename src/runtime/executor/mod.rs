//! Task executor implementation.
//!
//! This module contains the components that run submitted tasks.
//!
//! It is composed of:
//! - `core`: the shared pool state, lazy worker spawning and shutdown,
//! - `worker`: worker threads that drain the registry in FIFO order.

pub(crate) mod core;
pub(crate) mod worker;
