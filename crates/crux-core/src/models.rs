//! Data models exchanged with the remote API and persisted locally
//!
//! Field names follow the API's camelCase JSON so values round-trip
//! through storage unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::code::RegistrationCode;
use crate::id::{ContenderId, ContestId, ProblemId};

/// Point values awarded by one problem.
///
/// All point values are non-negative; optional tiers that a problem
/// does not award are simply absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRuleSet {
    /// Points for reaching the top
    pub points_top: u32,
    /// Points for the high zone hold, if the problem has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_zone_high: Option<u32>,
    /// Points for the low zone hold, if the problem has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_zone_low: Option<u32>,
    /// Extra points for topping on the first attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_bonus: Option<u32>,
}

impl ProblemRuleSet {
    /// Rule set awarding only top points
    pub fn top_only(points_top: u32) -> Self {
        ProblemRuleSet {
            points_top,
            points_zone_high: None,
            points_zone_low: None,
            flash_bonus: None,
        }
    }
}

/// A contender's logged outcome on one problem (a "tick").
///
/// At most one achieved tier counts toward the score; top dominates
/// the high zone, which dominates the low zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ascent {
    pub top: bool,
    pub attempts_top: u32,
    pub zone_high: bool,
    pub attempts_zone_high: u32,
    pub zone_low: bool,
    pub attempts_zone_low: u32,
}

impl Ascent {
    /// A top on the first attempt
    pub fn flash() -> Self {
        Ascent {
            top: true,
            attempts_top: 1,
            ..Ascent::default()
        }
    }
}

/// A registered contender as resolved by the remote API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contender {
    pub id: ContenderId,
    pub contest_id: ContestId,
    pub registration_code: RegistrationCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Contest timing as served by the API; the grace period arrives as a
/// duration rather than an absolute bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestSchedule {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub grace_period_seconds: u32,
}

/// A problem as consumed by the scorecard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: ProblemId,
    pub contest_id: ContestId,
    pub number: u32,
    #[serde(flatten)]
    pub rules: ProblemRuleSet,
}

/// An authenticated contender session, persisted locally so a device
/// can resume without re-entering the registration code.
///
/// Owned exclusively by the session store; consumers only ever see
/// snapshots. The serialized form is the on-disk schema - a JSON object
/// with camelCase keys and an ISO-8601 expiry timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContenderSession {
    pub contender_id: ContenderId,
    pub contest_id: ContestId,
    pub registration_code: RegistrationCode,
    pub expiry_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_session_persisted_shape() {
        let session = ContenderSession {
            contender_id: ContenderId::new(17),
            contest_id: ContestId::new(3),
            registration_code: RegistrationCode::parse("ABCD1234").unwrap(),
            expiry_time: Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap(),
        };

        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(
            json,
            "{\"contenderId\":17,\"contestId\":3,\
             \"registrationCode\":\"ABCD1234\",\
             \"expiryTime\":\"2025-06-01T18:00:00Z\"}"
        );

        let back: ContenderSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_session_schema_rejects_bad_code() {
        let json = "{\"contenderId\":1,\"contestId\":1,\
                    \"registrationCode\":\"short\",\
                    \"expiryTime\":\"2025-06-01T18:00:00Z\"}";
        let parsed: Result<ContenderSession, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_problem_rules_flatten() {
        let json = "{\"id\":5,\"contestId\":2,\"number\":12,\
                    \"pointsTop\":100,\"flashBonus\":10}";
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.rules.points_top, 100);
        assert_eq!(problem.rules.flash_bonus, Some(10));
        assert_eq!(problem.rules.points_zone_high, None);
    }
}
