use crate::error::{PoolError, Result};
use crate::runtime::executor::worker::Worker;
use crate::runtime::pool::{PoolStats, WorkerPool};
use crate::runtime::registry::Registry;
use crate::runtime::signal::Signal;
use crate::runtime::task::{Job, Status, TaskHandle};

use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, trace, warn};

/// Everything guarded by the pool mutex.
///
/// Keeping the registry, the worker counters and the shutdown flag behind a
/// single lock makes "append task, decide on a spawn, record the worker" one
/// atomic step.
pub(crate) struct State<T> {
    pub(crate) registry: Registry<T>,
    pub(crate) workers: WorkerPool,
    pub(crate) shutdown: bool,
}

/// State shared between the executor and its worker threads.
pub(crate) struct Shared<T> {
    pub(crate) state: Mutex<State<T>>,

    /// Wakes idle workers on new work or shutdown.
    pub(crate) work_ready: Signal,

    /// Wakes callers blocked in [`Executor::wait`] when a task finishes.
    pub(crate) task_done: Signal,

    /// Wakes shutdown callers when a worker leaves its loop.
    pub(crate) worker_exited: Signal,
}

/// Entry point of a worker thread.
pub(crate) type WorkerBody = Box<dyn FnOnce() + Send>;

/// Starts a worker thread from a configured builder and the worker body.
pub(crate) type Spawner =
    Box<dyn Fn(thread::Builder, WorkerBody) -> io::Result<JoinHandle<()>> + Send + Sync>;

/// Multi-threaded task executor.
///
/// The `Executor` is responsible for:
/// - appending submitted jobs to the registry,
/// - lazily spawning worker threads up to the configured maximum,
/// - answering status and result queries,
/// - draining the queue and joining workers on shutdown.
pub(crate) struct Executor<T> {
    shared: Arc<Shared<T>>,

    /// Prefix of worker thread names.
    thread_name: String,

    spawner: Spawner,
}

impl<T: Send + 'static> Executor<T> {
    /// Creates an executor that may grow to `max_workers` threads.
    ///
    /// No thread is started until the first submission.
    pub(crate) fn new(max_workers: usize, thread_name: String) -> Self {
        Self::with_spawner(max_workers, thread_name, Box::new(spawn_thread))
    }

    pub(crate) fn with_spawner(max_workers: usize, thread_name: String, spawner: Spawner) -> Self {
        let state = State {
            registry: Registry::new(),
            workers: WorkerPool::new(max_workers),
            shutdown: false,
        };

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                work_ready: Signal::new(),
                task_done: Signal::new(),
                worker_exited: Signal::new(),
            }),
            thread_name,
            spawner,
        }
    }

    /// Appends a job and makes sure some worker will pick it up.
    pub(crate) fn submit(&self, job: Job<T>) -> Result<TaskHandle> {
        let mut state = self.shared.state.lock();

        if state.shutdown {
            return Err(PoolError::PoolClosed);
        }

        let handle = state.registry.push(job);

        if let Some(index) = state.workers.reserve() {
            // The new thread blocks on the state lock until this submit returns.
            match self.spawn_worker(index) {
                Ok(worker) => state.workers.attach(worker),
                Err(err) => {
                    state.workers.cancel_reservation();

                    if state.workers.spawned() == 0 {
                        error!(worker = index, error = %err, "failed to spawn first worker");
                        state.registry.retract(handle);
                        return Err(PoolError::WorkerSpawn(err));
                    }

                    warn!(
                        worker = index,
                        error = %err,
                        "failed to spawn worker, relying on existing ones"
                    );
                }
            }
        }

        trace!(task = %handle, "task queued");
        self.shared.work_ready.wake_one();

        Ok(handle)
    }

    fn spawn_worker(&self, index: usize) -> io::Result<JoinHandle<()>> {
        let worker = Worker::new(index, self.shared.clone());

        let builder = thread::Builder::new().name(format!("{}-{}", self.thread_name, index));
        let handle = (self.spawner)(builder, Box::new(move || worker.run()))?;

        debug!(worker = index, "spawned worker thread");
        Ok(handle)
    }

    pub(crate) fn status(&self, handle: TaskHandle) -> Result<Status> {
        self.shared.state.lock().registry.status(handle)
    }

    pub(crate) fn result(&self, handle: TaskHandle) -> Result<T>
    where
        T: Clone,
    {
        self.shared.state.lock().registry.result(handle)
    }

    pub(crate) fn dispose(&self, handle: TaskHandle) -> Result<()> {
        self.shared.state.lock().registry.dispose(handle)
    }

    /// Blocks until the task reaches a terminal status.
    pub(crate) fn wait(&self, handle: TaskHandle) -> Result<Status> {
        let mut state = self.shared.state.lock();

        loop {
            let status = state.registry.status(handle)?;
            if status.is_terminal() {
                return Ok(status);
            }

            self.shared.task_done.park(&mut state);
        }
    }

    pub(crate) fn stats(&self) -> PoolStats {
        let state = self.shared.state.lock();

        PoolStats {
            max_workers: state.workers.max_workers(),
            spawned_workers: state.workers.spawned(),
            idle_workers: state.workers.idle(),
            submitted: state.registry.len(),
            queued: state.registry.queued(),
            running: state.registry.running(),
            finished: state.registry.finished(),
            closed: state.shutdown,
        }
    }

    pub(crate) fn max_workers(&self) -> usize {
        self.shared.state.lock().workers.max_workers()
    }

    /// Stops accepting work, lets workers drain the queue and joins them.
    ///
    /// Calling this more than once is harmless. Only the first caller joins
    /// the threads; every other caller blocks until all workers have left
    /// their loop.
    pub(crate) fn shutdown(&self) {
        let workers = {
            let mut state = self.shared.state.lock();

            if !state.shutdown {
                debug!(
                    queued = state.registry.queued(),
                    running = state.registry.running(),
                    "shutting down executor"
                );
            }

            state.shutdown = true;
            self.shared.work_ready.wake_all();
            state.workers.take_handles()
        };

        let count = workers.len();
        for worker in workers {
            if worker.join().is_err() {
                error!("worker thread terminated abnormally");
            }
        }

        let mut state = self.shared.state.lock();
        while state.workers.live() > 0 {
            self.shared.worker_exited.park(&mut state);
        }

        if count > 0 {
            debug!(workers = count, "all workers stopped");
        }
    }
}

fn spawn_thread(builder: thread::Builder, body: WorkerBody) -> io::Result<JoinHandle<()>> {
    builder.spawn(body)
}
