use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::task::JoinHandle;

/// Delays an async action until a quiet period of `delay` has elapsed since
/// the last trigger, coalescing bursts into a single invocation with the
/// latest arguments.
///
/// At most one timer task is pending at a time: `trigger` aborts the previous
/// one before scheduling, so a superseded invocation never fires. Must be
/// used from within a tokio runtime.
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    action: Arc<dyn Fn(T) -> BoxFuture<'static, ()> + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(
        delay: Duration,
        action: impl Fn(T) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            delay,
            action: Arc::new(action),
            pending: Mutex::new(None),
        }
    }

    /// Records `args` as the latest pending call and (re)starts the delay
    /// timer. Any previously scheduled, not-yet-fired invocation is
    /// discarded.
    pub fn trigger(&self, args: T) {
        let action = Arc::clone(&self.action);
        let delay = self.delay;

        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(args).await;
        }));
    }

    /// Discards any pending scheduled invocation. No-op when none is pending.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock_pending().take() {
            handle.abort();
        }
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // Poisoning cannot leave the handle in a bad state; keep going.
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "tests/debounce_tests.rs"]
mod tests;
