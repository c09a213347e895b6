use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Condvar, MutexGuard, PoisonError};

pub struct Mutex<T>(std::sync::Mutex<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Counts queued work that has not finished yet and lets callers block until
/// the count drains to zero.
pub struct Pending {
    count: AtomicUsize,
    halted: AtomicBool,
    lock: Mutex<()>,
    drained: Condvar,
}

impl Pending {
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
            halted: AtomicBool::new(false),
            lock: Mutex::new(()),
            drained: Condvar::new(),
        }
    }

    pub fn add(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn done(&self) {
        let _guard = self.lock.lock();
        if self.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.drained.notify_all();
        }
    }

    /// Marks the worker as dead so waiters stop waiting for work that will
    /// never run.
    pub fn halt(&self) {
        let _guard = self.lock.lock();
        self.halted.store(true, Ordering::SeqCst);
        self.drained.notify_all();
    }

    pub fn is_halted(&self) -> bool {
        self.halted.load(Ordering::SeqCst)
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Blocks until the count is zero or the worker has halted.
    pub fn wait(&self) {
        let mut guard = self.lock.lock();
        while self.count() != 0 && !self.is_halted() {
            guard = self
                .drained
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use super::Pending;

    #[test]
    fn wait_returns_immediately_when_idle() {
        let pending = Pending::new();
        pending.wait();
        assert_eq!(pending.count(), 0);
    }

    #[test]
    fn wait_blocks_until_every_item_is_done() {
        let pending = Arc::new(Pending::new());
        pending.add();
        pending.add();

        let worker = {
            let pending = Arc::clone(&pending);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(5));
                pending.done();
                thread::sleep(Duration::from_millis(5));
                pending.done();
            })
        };

        pending.wait();
        assert_eq!(pending.count(), 0);
        worker.join().unwrap();
    }

    #[test]
    fn halt_releases_waiters() {
        let pending = Arc::new(Pending::new());
        pending.add();

        let halter = {
            let pending = Arc::clone(&pending);
            thread::spawn(move || pending.halt())
        };

        pending.wait();
        assert!(pending.is_halted());
        assert_eq!(pending.count(), 1);
        halter.join().unwrap();
    }
}
