use super::{Status, TaskHandle};
use crate::error::{PoolError, Result};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// A boxed task body with its arguments already bound.
pub type Job<T> = Box<dyn FnOnce() -> T + Send + 'static>;

/// What a finished task body left behind.
pub(crate) enum Outcome<T> {
    Value(T),
    Panicked(String),
}

/// Result slot of a task record.
enum Slot<T> {
    Pending,
    Filled(Outcome<T>),
    Disposed,
}

/// One entry of the task registry.
///
/// The record owns the job until a worker claims it, then the outcome once
/// the worker reports back. The status always reflects which of the two it
/// holds.
pub(crate) struct Task<T> {
    /// Job waiting to be claimed. Taken exactly once.
    job: Option<Job<T>>,

    /// Current lifecycle status.
    status: Status,

    /// Value or panic message written on completion.
    slot: Slot<T>,
}

impl<T> Task<T> {
    /// Creates a task record in the `Queued` status.
    pub(crate) fn new(job: Job<T>) -> Self {
        Self {
            job: Some(job),
            status: Status::Queued,
            slot: Slot::Pending,
        }
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    /// Takes the job out of the record and marks it `Running`.
    ///
    /// Returns `None` if the task was already claimed.
    pub(crate) fn claim(&mut self) -> Option<Job<T>> {
        let job = self.job.take()?;
        self.status = Status::Running;
        Some(job)
    }

    /// Stores the outcome and moves the task to its terminal status.
    pub(crate) fn finish(&mut self, outcome: Outcome<T>) {
        debug_assert_eq!(self.status, Status::Running);

        self.status = match outcome {
            Outcome::Value(_) => Status::Ready,
            Outcome::Panicked(_) => Status::Failed,
        };
        self.slot = Slot::Filled(outcome);
    }

    /// Returns a copy of the stored value.
    pub(crate) fn read(&self, handle: TaskHandle) -> Result<T>
    where
        T: Clone,
    {
        match &self.slot {
            Slot::Filled(Outcome::Value(value)) => Ok(value.clone()),
            Slot::Filled(Outcome::Panicked(message)) => Err(PoolError::TaskFailed {
                handle,
                message: message.clone(),
            }),
            Slot::Disposed => Err(PoolError::Disposed { handle }),
            Slot::Pending => Err(PoolError::NotReady {
                handle,
                status: self.status,
            }),
        }
    }

    /// Drops the stored outcome of a terminal task, keeping its status.
    pub(crate) fn dispose(&mut self, handle: TaskHandle) -> Result<()> {
        if !self.status.is_terminal() {
            return Err(PoolError::NotReady {
                handle,
                status: self.status,
            });
        }

        self.slot = Slot::Disposed;
        Ok(())
    }
}

/// Runs a job, turning a panic into an [`Outcome::Panicked`].
///
/// Must be called without any pool lock held.
pub(crate) fn execute<T>(job: Job<T>) -> Outcome<T> {
    match panic::catch_unwind(AssertUnwindSafe(job)) {
        Ok(value) => Outcome::Value(value),
        Err(payload) => Outcome::Panicked(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "task panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_is_exclusive() {
        let mut task: Task<i32> = Task::new(Box::new(|| 7));

        assert_eq!(task.status(), Status::Queued);
        assert!(task.claim().is_some());
        assert_eq!(task.status(), Status::Running);
        assert!(task.claim().is_none());
    }

    #[test]
    fn test_read_before_finish_is_not_ready() {
        let mut task: Task<i32> = Task::new(Box::new(|| 7));
        let handle = TaskHandle::from_index(0);

        assert!(matches!(
            task.read(handle),
            Err(PoolError::NotReady {
                status: Status::Queued,
                ..
            })
        ));

        let job = task.claim().unwrap();
        task.finish(execute(job));

        assert_eq!(task.status(), Status::Ready);
        assert_eq!(task.read(handle).unwrap(), 7);
        assert_eq!(task.read(handle).unwrap(), 7);
    }

    #[test]
    fn test_panic_is_captured() {
        let outcome = execute::<u32>(Box::new(|| -> u32 { panic!("boom") }));
        assert!(matches!(outcome, Outcome::Panicked(ref m) if m == "boom"));

        let outcome = execute::<u32>(Box::new(|| -> u32 { panic!("code {}", 42) }));
        assert!(matches!(outcome, Outcome::Panicked(ref m) if m == "code 42"));
    }

    #[test]
    fn test_failed_task_reports_message() {
        let mut task: Task<u32> = Task::new(Box::new(|| -> u32 { panic!("bad input") }));
        let handle = TaskHandle::from_index(4);

        let job = task.claim().unwrap();
        task.finish(execute(job));

        assert_eq!(task.status(), Status::Failed);
        match task.read(handle) {
            Err(PoolError::TaskFailed { message, .. }) => assert_eq!(message, "bad input"),
            other => panic!("unexpected read result: {other:?}"),
        }
    }

    #[test]
    fn test_dispose_requires_terminal_status() {
        let mut task: Task<String> = Task::new(Box::new(|| String::from("done")));
        let handle = TaskHandle::from_index(0);

        assert!(task.dispose(handle).is_err());

        let job = task.claim().unwrap();
        task.finish(execute(job));
        task.dispose(handle).unwrap();

        assert_eq!(task.status(), Status::Ready);
        assert!(matches!(task.read(handle), Err(PoolError::Disposed { .. })));
    }
}
