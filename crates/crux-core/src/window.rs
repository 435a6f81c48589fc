//! Contest windows and phase derivation
//!
//! A contest window is three timestamps; the current phase is always
//! derived from the window and the wall clock, never stored on its own.

use chrono::{DateTime, Duration, Utc};

use crate::error::{CruxError, CruxResult};
use crate::models::ContestSchedule;

/// Phase of a contest at a given instant.
///
/// The ordering matches chronological progression, so phase observed
/// at a later instant is never smaller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContestPhase {
    /// Before the start time
    NotStarted,
    /// Between start and end - scoring is open
    Running,
    /// After the end time but before the grace period closes -
    /// scoring actions are still permitted
    GracePeriod,
    /// After the last boundary - terminal
    Ended,
}

/// Immutable contest time window.
///
/// Replaced wholesale whenever the contest definition is refreshed;
/// construction fails fast on a malformed window rather than clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContestWindow {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    grace_period_end: Option<DateTime<Utc>>,
}

impl ContestWindow {
    /// Create a window from explicit boundaries.
    ///
    /// Fails if `end_time` precedes `start_time` or `grace_period_end`
    /// precedes `end_time`.
    pub fn new(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        grace_period_end: Option<DateTime<Utc>>,
    ) -> CruxResult<Self> {
        if end_time < start_time {
            return Err(CruxError::InvalidContestWindow(format!(
                "end time {end_time} precedes start time {start_time}"
            )));
        }
        if let Some(grace) = grace_period_end {
            if grace < end_time {
                return Err(CruxError::InvalidContestWindow(format!(
                    "grace period end {grace} precedes end time {end_time}"
                )));
            }
        }
        Ok(ContestWindow {
            start_time,
            end_time,
            grace_period_end,
        })
    }

    /// Build a window from a contest schedule as served by the API,
    /// where the grace period is a duration in seconds after the end.
    pub fn from_schedule(schedule: &ContestSchedule) -> CruxResult<Self> {
        let grace_period_end = if schedule.grace_period_seconds > 0 {
            Some(schedule.end_time + Duration::seconds(i64::from(schedule.grace_period_seconds)))
        } else {
            None
        };
        ContestWindow::new(schedule.start_time, schedule.end_time, grace_period_end)
    }

    #[inline]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    #[inline]
    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    #[inline]
    pub fn grace_period_end(&self) -> Option<DateTime<Utc>> {
        self.grace_period_end
    }

    /// Derive the phase at an instant. Pure; recomputed on every
    /// observation rather than cached.
    pub fn phase_at(&self, now: DateTime<Utc>) -> ContestPhase {
        if now < self.start_time {
            ContestPhase::NotStarted
        } else if now < self.end_time {
            ContestPhase::Running
        } else if matches!(self.grace_period_end, Some(grace) if now < grace) {
            ContestPhase::GracePeriod
        } else {
            ContestPhase::Ended
        }
    }

    /// The earliest boundary strictly after `now`, if any.
    ///
    /// `None` means the window is past its last boundary and no further
    /// transition can happen without a new window.
    pub fn next_boundary_after(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        [
            Some(self.start_time),
            Some(self.end_time),
            self.grace_period_end,
        ]
        .into_iter()
        .flatten()
        .filter(|boundary| *boundary > now)
        .min()
    }
}
