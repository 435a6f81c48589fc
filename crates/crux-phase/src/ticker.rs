//! Boundary-aligned periodic ticker
//!
//! Drives countdown displays: fires once per interval, aligned to
//! interval boundaries of the wall clock. Each tick re-derives the next
//! delay from `now % interval`, so accumulated timer drift is corrected
//! on every cycle instead of compounding.

use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::clock::Clock;
use crate::scheduler::{Scheduler, WakeupHandle};

/// Some timer backends wake a hair early; padding the delay keeps the
/// tick on the far side of the boundary.
const EARLY_WAKE_COMPENSATION: Duration = Duration::from_millis(1);

struct TickerInner {
    enabled: bool,
    pending: Option<WakeupHandle>,
    on_tick: Option<Box<dyn FnMut(DateTime<Utc>) + Send>>,
    last_tick: Option<DateTime<Utc>>,
}

/// Periodic ticker synced to wall-clock interval boundaries.
///
/// Stopped on creation; `start` fires an immediate tick and then keeps
/// one wake-up pending until `stop`.
pub struct SyncedTicker {
    inner: Arc<Mutex<TickerInner>>,
    clock: Arc<dyn Clock>,
    scheduler: Arc<dyn Scheduler>,
    interval: Duration,
}

impl SyncedTicker {
    pub fn new(interval: Duration, clock: Arc<dyn Clock>, scheduler: Arc<dyn Scheduler>) -> Self {
        SyncedTicker {
            inner: Arc::new(Mutex::new(TickerInner {
                enabled: false,
                pending: None,
                on_tick: None,
                last_tick: None,
            })),
            clock,
            scheduler,
            interval,
        }
    }

    /// One-second ticker, the cadence countdown displays want
    pub fn seconds(clock: Arc<dyn Clock>, scheduler: Arc<dyn Scheduler>) -> Self {
        SyncedTicker::new(Duration::from_secs(1), clock, scheduler)
    }

    /// Register the tick callback, replacing any previous one.
    pub fn on_tick(&self, callback: impl FnMut(DateTime<Utc>) + Send + 'static) {
        self.inner.lock().on_tick = Some(Box::new(callback));
    }

    /// Start ticking; the first tick fires immediately.
    pub fn start(&self) {
        {
            let mut inner = self.inner.lock();
            inner.enabled = true;
            inner.pending = None;
        }
        tick(
            Arc::downgrade(&self.inner),
            Arc::clone(&self.clock),
            Arc::clone(&self.scheduler),
            self.interval,
        );
    }

    /// Stop ticking and cancel the pending wake-up.
    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        inner.enabled = false;
        inner.pending = None;
    }

    /// Wall-clock time observed by the most recent tick
    pub fn last_tick(&self) -> Option<DateTime<Utc>> {
        self.inner.lock().last_tick
    }
}

impl Drop for SyncedTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn tick(
    shared: Weak<Mutex<TickerInner>>,
    clock: Arc<dyn Clock>,
    scheduler: Arc<dyn Scheduler>,
    interval: Duration,
) {
    let Some(strong) = shared.upgrade() else {
        return;
    };
    let mut inner = strong.lock();
    if !inner.enabled {
        return;
    }

    let now = clock.now();
    inner.last_tick = Some(now);
    if let Some(callback) = inner.on_tick.as_mut() {
        callback(now);
    }

    let delay = delay_to_next_boundary(now, interval);
    let shared = Arc::downgrade(&strong);
    let wake_scheduler = Arc::clone(&scheduler);
    inner.pending = Some(scheduler.schedule(
        delay,
        Box::new(move || tick(shared, clock, wake_scheduler, interval)),
    ));
}

/// Delay until just past the next interval boundary
fn delay_to_next_boundary(now: DateTime<Utc>, interval: Duration) -> Duration {
    let interval_ms = interval.as_millis().max(1) as i64;
    let drift_ms = now.timestamp_millis().rem_euclid(interval_ms);
    Duration::from_millis((interval_ms - drift_ms) as u64) + EARLY_WAKE_COMPENSATION
}
