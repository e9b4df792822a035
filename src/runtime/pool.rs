use std::thread::JoinHandle;

/// Bookkeeping for the lazily grown set of worker threads.
///
/// The pool state mutex guards this structure together with the task
/// registry, so the spawn decision below is taken atomically with the task
/// append that triggered it.
pub(crate) struct WorkerPool {
    /// Upper bound on threads ever created.
    max_workers: usize,

    /// Threads created so far, including reserved ones still starting.
    spawned: usize,

    /// Threads currently parked waiting for work.
    idle: usize,

    /// Started threads that have not left their loop yet.
    live: usize,

    /// Join handles of started workers, taken at shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub(crate) fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            spawned: 0,
            idle: 0,
            live: 0,
            handles: Vec::with_capacity(max_workers),
        }
    }

    /// Reserves a slot for a new worker if the pool needs one.
    ///
    /// A worker is needed when nobody is idle and the pool has not reached
    /// `max_workers`. Returns the index of the new worker.
    pub(crate) fn reserve(&mut self) -> Option<usize> {
        if self.spawned >= self.max_workers || self.idle > 0 {
            return None;
        }

        let index = self.spawned;
        self.spawned += 1;
        Some(index)
    }

    /// Gives back a reservation whose thread could not be started.
    pub(crate) fn cancel_reservation(&mut self) {
        self.spawned -= 1;
    }

    /// Records a started worker thread.
    pub(crate) fn attach(&mut self, handle: JoinHandle<()>) {
        self.handles.push(handle);
        self.live += 1;
    }

    /// Called by a worker on its way out of the loop.
    pub(crate) fn retire(&mut self) {
        self.live -= 1;
    }

    pub(crate) fn enter_idle(&mut self) {
        self.idle += 1;
    }

    pub(crate) fn leave_idle(&mut self) {
        self.idle -= 1;
    }

    pub(crate) fn take_handles(&mut self) -> Vec<JoinHandle<()>> {
        std::mem::take(&mut self.handles)
    }

    pub(crate) fn max_workers(&self) -> usize {
        self.max_workers
    }

    pub(crate) fn spawned(&self) -> usize {
        self.spawned
    }

    pub(crate) fn idle(&self) -> usize {
        self.idle
    }

    pub(crate) fn live(&self) -> usize {
        self.live
    }
}

/// Point-in-time counters of a [`TaskPool`](crate::TaskPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Configured maximum number of worker threads.
    pub max_workers: usize,

    /// Worker threads created so far.
    pub spawned_workers: usize,

    /// Worker threads parked waiting for work.
    pub idle_workers: usize,

    /// Tasks ever accepted.
    pub submitted: usize,

    /// Tasks not yet claimed by a worker.
    pub queued: usize,

    /// Tasks claimed and still executing.
    pub running: usize,

    /// Tasks in `Ready` or `Failed` status.
    pub finished: usize,

    /// Whether shutdown has begun.
    pub closed: bool,
}
