use parking_lot::{Condvar, MutexGuard};

/// Wake/sleep channel paired with the pool state mutex.
///
/// Waiters always park while holding the state guard, and notifiers always
/// change state under that same guard before signaling, so a notification
/// can never slip between a waiter's check and its park.
///
/// Wake-ups may be spurious. Callers re-check the state after every park.
pub(crate) struct Signal {
    condvar: Condvar,
}

impl Signal {
    pub(crate) fn new() -> Self {
        Self {
            condvar: Condvar::new(),
        }
    }

    /// Releases the guard and parks until notified, then re-acquires it.
    pub(crate) fn park<S>(&self, guard: &mut MutexGuard<'_, S>) {
        self.condvar.wait(guard);
    }

    /// Wakes at most one parked thread.
    pub(crate) fn wake_one(&self) {
        self.condvar.notify_one();
    }

    /// Wakes every parked thread.
    pub(crate) fn wake_all(&self) {
        self.condvar.notify_all();
    }
}
