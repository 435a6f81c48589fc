//! End-to-end scenarios across authentication, phases, and scoring

use chrono::{DateTime, TimeZone, Utc};

use crux_core::{Contender, ContenderId, ContestId, ContestSchedule, RegistrationCode};

use crate::harness::FakeDirectory;

/// Contest start used by the standard scenario
pub fn scenario_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 14, 10, 0, 0).unwrap()
}

/// A one-hour contest with one registered contender, no grace period
pub fn standard_contest() -> (FakeDirectory, ContestSchedule, RegistrationCode) {
    let start = scenario_start();
    let schedule = ContestSchedule {
        start_time: start,
        end_time: start + chrono::Duration::hours(1),
        grace_period_seconds: 0,
    };

    let directory = FakeDirectory::new();
    let contest_id = ContestId::new(10);
    directory.add_contest(contest_id, schedule);

    let code = RegistrationCode::parse("QRST5678").unwrap();
    directory.add_contender(Contender {
        id: ContenderId::new(1),
        contest_id,
        registration_code: code.clone(),
        name: Some("Sam".to_string()),
    });

    (directory, schedule, code)
}
