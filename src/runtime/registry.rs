use crate::error::{PoolError, Result};
use crate::runtime::task::{Job, Outcome, Status, Task, TaskHandle};

/// Append-only ledger of submitted tasks with a FIFO claim cursor.
///
/// Tasks are addressed by their position in the ledger, which is also the
/// value of their [`TaskHandle`]. Every task before `cursor` has been claimed;
/// every task from `cursor` onwards is still `Queued`.
///
/// The registry itself is not synchronized. It lives inside the pool state
/// mutex, so append, claim and completion are serialized by the same lock.
pub(crate) struct Registry<T> {
    /// All tasks ever submitted, in submission order.
    tasks: Vec<Task<T>>,

    /// Index of the next task eligible for execution.
    cursor: usize,

    /// Number of claimed tasks that have not finished yet.
    running: usize,

    /// Number of tasks in a terminal status.
    finished: usize,
}

impl<T> Registry<T> {
    pub(crate) fn new() -> Self {
        Self {
            tasks: Vec::new(),
            cursor: 0,
            running: 0,
            finished: 0,
        }
    }

    /// Appends a new `Queued` task and returns its handle.
    pub(crate) fn push(&mut self, job: Job<T>) -> TaskHandle {
        let handle = TaskHandle::from_index(self.tasks.len());
        self.tasks.push(Task::new(job));
        handle
    }

    /// Removes the most recent task if it is still unclaimed.
    ///
    /// Only valid for a handle that was never returned to a caller.
    pub(crate) fn retract(&mut self, handle: TaskHandle) -> bool {
        let is_last = handle.index() == self.tasks.len().checked_sub(1);
        if !is_last || self.cursor >= self.tasks.len() {
            return false;
        }

        self.tasks.pop();
        true
    }

    /// Claims the task under the cursor.
    ///
    /// The task is marked `Running` and the cursor advanced before the job is
    /// handed out, so no other worker can observe it as claimable.
    pub(crate) fn claim(&mut self) -> Option<(TaskHandle, Job<T>)> {
        while self.cursor < self.tasks.len() {
            let index = self.cursor;
            self.cursor += 1;

            if let Some(job) = self.tasks[index].claim() {
                self.running += 1;
                return Some((TaskHandle::from_index(index), job));
            }
        }

        None
    }

    /// Records the outcome of a claimed task.
    pub(crate) fn complete(&mut self, handle: TaskHandle, outcome: Outcome<T>) {
        let Some(task) = handle.index().and_then(|i| self.tasks.get_mut(i)) else {
            return;
        };

        task.finish(outcome);
        self.running -= 1;
        self.finished += 1;
    }

    pub(crate) fn status(&self, handle: TaskHandle) -> Result<Status> {
        self.get(handle).map(Task::status)
    }

    pub(crate) fn result(&self, handle: TaskHandle) -> Result<T>
    where
        T: Clone,
    {
        self.get(handle)?.read(handle)
    }

    pub(crate) fn dispose(&mut self, handle: TaskHandle) -> Result<()> {
        handle
            .index()
            .and_then(|i| self.tasks.get_mut(i))
            .ok_or(PoolError::OutOfRange { handle })?
            .dispose(handle)
    }

    /// Number of tasks ever submitted.
    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn queued(&self) -> usize {
        self.tasks.len() - self.cursor
    }

    pub(crate) fn running(&self) -> usize {
        self.running
    }

    pub(crate) fn finished(&self) -> usize {
        self.finished
    }

    fn get(&self, handle: TaskHandle) -> Result<&Task<T>> {
        handle
            .index()
            .and_then(|i| self.tasks.get(i))
            .ok_or(PoolError::OutOfRange { handle })
    }
}
