//! One-shot wake-up scheduling
//!
//! Each scheduled wake-up is owned by a single cancellable handle;
//! dropping the handle cancels the wake-up. This replaces any ambient
//! timer state: whoever holds the handle owns the timer.

use std::fmt;
use std::time::Duration;

/// Cancellable handle to one pending wake-up.
///
/// Cancels on drop, so replacing a stored handle atomically swaps the
/// old wake-up for the new one.
pub struct WakeupHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl WakeupHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        WakeupHandle {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancel the pending wake-up explicitly
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for WakeupHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for WakeupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WakeupHandle")
    }
}

/// Schedules one-shot wake-ups after a delay
pub trait Scheduler: Send + Sync {
    /// Run `wake` once after `after` has elapsed, unless the returned
    /// handle is cancelled first.
    fn schedule(&self, after: Duration, wake: Box<dyn FnOnce() + Send>) -> WakeupHandle;
}

/// Scheduler backed by the tokio timer
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
}

impl TokioScheduler {
    /// Create a scheduler on the current runtime.
    ///
    /// Panics outside a tokio runtime context, same as
    /// `tokio::runtime::Handle::current`.
    pub fn new() -> Self {
        TokioScheduler {
            handle: tokio::runtime::Handle::current(),
        }
    }

    pub fn with_handle(handle: tokio::runtime::Handle) -> Self {
        TokioScheduler { handle }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, after: Duration, wake: Box<dyn FnOnce() + Send>) -> WakeupHandle {
        let task = self.handle.spawn(async move {
            tokio::time::sleep(after).await;
            wake();
        });
        WakeupHandle::new(move || task.abort())
    }
}
