use crate::runtime::executor::core::{Shared, State};
use crate::runtime::task::{Outcome, execute};

use parking_lot::MutexGuard;
use std::sync::Arc;
use tracing::{trace, warn};

/// Lifecycle of a worker thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Claiming and executing tasks until the queue is exhausted.
    Draining,

    /// Parked waiting for a wake signal.
    Idle,

    /// Queue exhausted after shutdown; the thread exits.
    Stopped,
}

/// A worker thread in the executor.
///
/// A `Worker` owns no task state. It claims tasks from the shared registry
/// in submission order and reports outcomes back to it.
///
/// The execution loop is:
/// 1. Claim the task under the cursor and run it with the lock released
/// 2. Repeat until no task is claimable
/// 3. Stop if shutdown was requested, otherwise park until woken
pub(crate) struct Worker<T> {
    /// Index of the worker, also used in its thread name.
    id: usize,

    shared: Arc<Shared<T>>,
}

impl<T: Send + 'static> Worker<T> {
    pub(crate) fn new(id: usize, shared: Arc<Shared<T>>) -> Self {
        Self { id, shared }
    }

    /// Runs the worker loop until the pool shuts down.
    pub(crate) fn run(self) {
        trace!(worker = self.id, "starting worker");

        let mut state = self.shared.state.lock();
        let mut phase = Phase::Draining;

        loop {
            phase = match phase {
                Phase::Draining => {
                    self.drain(&mut state);

                    if state.shutdown {
                        Phase::Stopped
                    } else {
                        Phase::Idle
                    }
                }
                Phase::Idle => {
                    state.workers.enter_idle();
                    trace!(worker = self.id, "worker idle");

                    self.shared.work_ready.park(&mut state);

                    state.workers.leave_idle();
                    Phase::Draining
                }
                Phase::Stopped => break,
            };
        }

        state.workers.retire();
        self.shared.worker_exited.wake_all();

        trace!(worker = self.id, "exiting worker");
    }

    /// Claims and executes tasks until the cursor reaches the end.
    ///
    /// The shutdown flag is not consulted here, so queued work is always
    /// finished before a worker stops.
    fn drain(&self, state: &mut MutexGuard<'_, State<T>>) {
        while let Some((handle, job)) = state.registry.claim() {
            trace!(worker = self.id, task = %handle, "claimed task");

            let outcome = MutexGuard::unlocked(state, || execute(job));

            if let Outcome::Panicked(message) = &outcome {
                warn!(worker = self.id, task = %handle, %message, "task panicked");
            }

            state.registry.complete(handle, outcome);
            self.shared.task_done.wake_all();
        }
    }
}
