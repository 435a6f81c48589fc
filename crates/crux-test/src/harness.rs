//! Fake collaborators and manual time control

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crux_core::{Contender, ContestId, ContestSchedule, CruxError, CruxResult, RegistrationCode};
use crux_phase::{Clock, Scheduler, WakeupHandle};
use crux_session::{CodeResolver, ContestWindowResolver};

/// In-memory directory of contenders and contests.
///
/// Resolves codes and contest schedules the way the remote API would,
/// with a switch for injecting transport failures.
#[derive(Default)]
pub struct FakeDirectory {
    contenders: Mutex<HashMap<RegistrationCode, Contender>>,
    contests: Mutex<HashMap<ContestId, ContestSchedule>>,
    fail_transport: AtomicBool,
}

impl FakeDirectory {
    pub fn new() -> Self {
        FakeDirectory::default()
    }

    pub fn add_contender(&self, contender: Contender) {
        self.contenders
            .lock()
            .insert(contender.registration_code.clone(), contender);
    }

    pub fn add_contest(&self, contest_id: ContestId, schedule: ContestSchedule) {
        self.contests.lock().insert(contest_id, schedule);
    }

    /// Make every resolution fail with a transport error until reset.
    pub fn set_transport_failure(&self, fail: bool) {
        self.fail_transport.store(fail, Ordering::SeqCst);
    }

    fn check_transport(&self) -> CruxResult<()> {
        if self.fail_transport.load(Ordering::SeqCst) {
            return Err(CruxError::Transport("injected failure".to_string()));
        }
        Ok(())
    }
}

impl CodeResolver for FakeDirectory {
    async fn find_contender_by_code(&self, code: &RegistrationCode) -> CruxResult<Contender> {
        self.check_transport()?;
        self.contenders
            .lock()
            .get(code)
            .cloned()
            .ok_or_else(|| CruxError::UnknownRegistrationCode(code.to_string()))
    }
}

impl ContestWindowResolver for FakeDirectory {
    async fn get_contest(&self, contest_id: ContestId) -> CruxResult<ContestSchedule> {
        self.check_transport()?;
        self.contests
            .lock()
            .get(&contest_id)
            .copied()
            .ok_or(CruxError::ContestNotFound(contest_id))
    }
}

/// Wall clock under test control
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(ManualClock {
            now: Mutex::new(now),
        })
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        let delta = chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
        let mut now = self.now.lock();
        *now = *now + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

struct PendingWake {
    after: Duration,
    wake: Box<dyn FnOnce() + Send>,
    cancelled: Arc<AtomicBool>,
}

/// Scheduler that holds wake-ups until the test fires them.
///
/// Wake-ups fire in scheduling order; cancelled entries are skipped.
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<Vec<PendingWake>>,
}

impl ManualScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(ManualScheduler::default())
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

    /// Fire wake-ups until the queue drains; returns how many fired
    pub fn run_to_idle(&self) -> usize {
        let mut fired = 0;
        while self.fire_next() {
            fired += 1;
        }
        fired
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

impl Scheduler for ManualScheduler {
    fn schedule(&self, after: Duration, wake: Box<dyn FnOnce() + Send>) -> WakeupHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.queue.lock().push(PendingWake {
            after,
            wake,
            cancelled: Arc::clone(&cancelled),
        });
        WakeupHandle::new(move || cancelled.store(true, Ordering::SeqCst))
    }
}
