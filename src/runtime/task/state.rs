use std::fmt;

/// Observable lifecycle status of a submitted task.
///
/// Statuses only ever move forward:
/// `Queued → Running → Ready` or `Queued → Running → Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Task is queued for execution.
    ///
    /// It has been appended to the registry but no worker has claimed it yet.
    Queued,

    /// Task is currently being executed by a worker.
    ///
    /// Exactly one worker observes a task in this state.
    Running,

    /// Task body returned; its value is available.
    Ready,

    /// Task body panicked; the panic message is kept instead of a value.
    Failed,
}

impl Status {
    /// Returns `true` once the task will never change status again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Ready | Status::Failed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Queued => "queued",
            Status::Running => "running",
            Status::Ready => "ready",
            Status::Failed => "failed",
        };
        f.write_str(name)
    }
}
