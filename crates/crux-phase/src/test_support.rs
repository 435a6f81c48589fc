//! Clock and scheduler doubles for unit tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::clock::Clock;
use crate::scheduler::{Scheduler, WakeupHandle};

/// Settable wall clock
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

impl TestClock {
    pub fn new(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(TestClock {
            now: Mutex::new(now),
        })
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

struct Pending {
    after: Duration,
    wake: Box<dyn FnOnce() + Send>,
    cancelled: Arc<AtomicBool>,
}

/// Scheduler that queues wake-ups until the test fires them
#[derive(Default)]
pub struct TestScheduler {
    queue: Mutex<Vec<Pending>>,
}

impl TestScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(TestScheduler::default())
    }

    /// Fire the oldest live wake-up; false when none remain
    pub fn fire_next(&self) -> bool {
        loop {
            let entry = {
                let mut queue = self.queue.lock();
                if queue.is_empty() {
                    return false;
                }
                queue.remove(0)
            };
            if entry.cancelled.load(Ordering::SeqCst) {
                continue;
            }
            (entry.wake)();
            return true;
        }
    }

    /// Wake-ups that are still pending and not cancelled
    pub fn live_count(&self) -> usize {
        self.queue
            .lock()
            .iter()
            .filter(|entry| !entry.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Delay of the next live wake-up
    pub fn next_delay(&self) -> Option<Duration> {
        self.queue
            .lock()
            .iter()
            .find(|entry| !entry.cancelled.load(Ordering::SeqCst))
            .map(|entry| entry.after)
    }
}

impl Scheduler for TestScheduler {
    fn schedule(&self, after: Duration, wake: Box<dyn FnOnce() + Send>) -> WakeupHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.queue.lock().push(Pending {
            after,
            wake,
            cancelled: Arc::clone(&cancelled),
        });
        WakeupHandle::new(move || cancelled.store(true, Ordering::SeqCst))
    }
}
