//! Phase engine - wall-clock-driven contest phase transitions
//!
//! Given a contest window, reports the current phase and schedules
//! exactly one wake-up for the next boundary. Every wake-up recomputes
//! the phase from the current wall clock rather than trusting the
//! elapsed delay, which keeps the engine correct across system clock
//! changes and suspended processes.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;

use crux_core::{ContestPhase, ContestWindow, CruxError, CruxResult};

use crate::clock::Clock;
use crate::scheduler::{Scheduler, WakeupHandle};

/// Observer invoked with the new phase on every boundary crossing.
///
/// Runs with the engine lock released, so it may call back into the
/// engine (for example to read `current_phase`).
pub type PhaseObserver = Box<dyn FnMut(ContestPhase) + Send>;

struct EngineInner {
    window: Option<ContestWindow>,
    pending: Option<WakeupHandle>,
    observer: Option<PhaseObserver>,
    last_phase: Option<ContestPhase>,
    disposed: bool,
}

/// Contest phase engine.
///
/// At most one wake-up is pending at any time; `configure` atomically
/// swaps it, and `dispose` is terminal.
pub struct PhaseEngine {
    inner: Arc<Mutex<EngineInner>>,
    clock: Arc<dyn Clock>,
    scheduler: Arc<dyn Scheduler>,
}

impl PhaseEngine {
    pub fn new(clock: Arc<dyn Clock>, scheduler: Arc<dyn Scheduler>) -> Self {
        PhaseEngine {
            inner: Arc::new(Mutex::new(EngineInner {
                window: None,
                pending: None,
                observer: None,
                last_phase: None,
                disposed: false,
            })),
            clock,
            scheduler,
        }
    }

    /// Register the phase-change observer, replacing any previous one.
    pub fn on_phase_change(&self, observer: impl FnMut(ContestPhase) + Send + 'static) {
        self.inner.lock().observer = Some(Box::new(observer));
    }

    /// Replace the active window, cancel any pending wake-up, recompute
    /// the phase immediately and re-arm for the next boundary.
    ///
    /// Callable repeatedly (on every data refresh) without leaking
    /// timers.
    pub fn configure(&self, window: ContestWindow) -> CruxResult<()> {
        let changed = {
            let mut inner = self.inner.lock();
            if inner.disposed {
                return Err(CruxError::EngineDisposed);
            }
            inner.pending = None;
            inner.window = Some(window);
            evaluate(&mut inner, &self.inner, &self.clock, &self.scheduler)
        };
        if let Some(phase) = changed {
            notify(&self.inner, phase);
        }
        Ok(())
    }

    /// Phase derived from the injected clock right now.
    ///
    /// `None` until a window has been configured.
    pub fn current_phase(&self) -> Option<ContestPhase> {
        let inner = self.inner.lock();
        inner.window.map(|window| window.phase_at(self.clock.now()))
    }

    /// The configured window, if any
    pub fn window(&self) -> Option<ContestWindow> {
        self.inner.lock().window
    }

    /// Cancel the pending wake-up and drop the observer. Terminal: no
    /// further callbacks fire and `configure` is rejected afterwards.
    pub fn dispose(&self) {
        let mut inner = self.inner.lock();
        inner.disposed = true;
        inner.pending = None;
        inner.observer = None;
    }
}

impl Drop for PhaseEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Recompute the phase from the wall clock and arm a wake-up for the
/// next boundary (none once `Ended`).
///
/// Returns the new phase when it differs from the last reported one;
/// the caller notifies the observer after releasing the lock.
fn evaluate(
    inner: &mut EngineInner,
    shared: &Arc<Mutex<EngineInner>>,
    clock: &Arc<dyn Clock>,
    scheduler: &Arc<dyn Scheduler>,
) -> Option<ContestPhase> {
    let window = inner.window?;

    let now = clock.now();
    let phase = window.phase_at(now);

    let changed = if inner.last_phase != Some(phase) {
        inner.last_phase = Some(phase);
        tracing::debug!(?phase, "contest phase changed");
        Some(phase)
    } else {
        None
    };

    inner.pending = window.next_boundary_after(now).map(|boundary| {
        let delay = (boundary - now).to_std().unwrap_or(Duration::ZERO);
        let shared = Arc::downgrade(shared);
        let clock = Arc::clone(clock);
        let wake_scheduler = Arc::clone(scheduler);
        scheduler.schedule(delay, Box::new(move || wake(shared, clock, wake_scheduler)))
    });

    changed
}

/// Invoke the observer with the engine lock released.
///
/// The observer is taken out for the duration of the call so it can
/// call back into the engine; it is restored afterwards unless the
/// engine was disposed or the callback registered a replacement.
fn notify(shared: &Arc<Mutex<EngineInner>>, phase: ContestPhase) {
    let Some(mut observer) = shared.lock().observer.take() else {
        return;
    };
    observer(phase);
    let mut inner = shared.lock();
    if !inner.disposed && inner.observer.is_none() {
        inner.observer = Some(observer);
    }
}

fn wake(shared: Weak<Mutex<EngineInner>>, clock: Arc<dyn Clock>, scheduler: Arc<dyn Scheduler>) {
    let Some(strong) = shared.upgrade() else {
        return;
    };
    let changed = {
        let mut inner = strong.lock();
        if inner.disposed {
            return;
        }
        // This wake-up has fired; it no longer needs cancelling.
        inner.pending = None;
        evaluate(&mut inner, &strong, &clock, &scheduler)
    };
    if let Some(phase) = changed {
        notify(&strong, phase);
    }
}
