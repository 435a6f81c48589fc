//! Crux Score Engine - pure scoring of a single ascent
//!
//! Maps a problem's rule set and an optional ascent record to a point
//! value. Total and side-effect free: every input yields a defined
//! non-negative score, there is no error path.
//!
//! Two policy decisions live here and nowhere else:
//! - Tier dominance: top > high zone > low zone. Once the top is
//!   achieved, zone fields are ignored entirely.
//! - Flash bonus: awarded only for a top on the first attempt.

use crux_core::{Ascent, ProblemRuleSet};

/// Compute the score for an ascent against its problem's rule set.
///
/// `None` means the contender has no tick on the problem and scores 0.
pub fn compute_score(rules: &ProblemRuleSet, ascent: Option<&Ascent>) -> u32 {
    let Some(ascent) = ascent else {
        return 0;
    };

    // Top dominates: evaluate before any zone credit.
    if ascent.top {
        let flash_bonus = match rules.flash_bonus {
            Some(bonus) if ascent.attempts_top == 1 => bonus,
            _ => 0,
        };
        // Saturate rather than overflow on extreme rule values; there
        // is no error path here.
        return rules.points_top.saturating_add(flash_bonus);
    }

    if ascent.zone_high {
        if let Some(points) = rules.points_zone_high {
            return points;
        }
    }

    if ascent.zone_low {
        if let Some(points) = rules.points_zone_low {
            return points;
        }
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rules() -> ProblemRuleSet {
        ProblemRuleSet {
            points_top: 100,
            points_zone_high: Some(50),
            points_zone_low: Some(25),
            flash_bonus: Some(10),
        }
    }

    #[test]
    fn test_no_ascent_scores_zero() {
        assert_eq!(compute_score(&rules(), None), 0);
        assert_eq!(compute_score(&ProblemRuleSet::top_only(100), None), 0);
    }

    #[test]
    fn test_blank_ascent_scores_zero() {
        assert_eq!(compute_score(&rules(), Some(&Ascent::default())), 0);
    }

    #[test]
    fn test_top_with_flash() {
        assert_eq!(compute_score(&rules(), Some(&Ascent::flash())), 110);
    }

    #[test]
    fn test_flash_bonus_gated_on_first_attempt() {
        let ascent = Ascent {
            top: true,
            attempts_top: 2,
            ..Ascent::default()
        };
        assert_eq!(compute_score(&rules(), Some(&ascent)), 100);
    }

    #[test]
    fn test_flash_bonus_needs_rule() {
        let no_bonus = ProblemRuleSet {
            flash_bonus: None,
            ..rules()
        };
        assert_eq!(compute_score(&no_bonus, Some(&Ascent::flash())), 100);
    }

    #[test]
    fn test_top_dominates_zones() {
        // A flashed top with the high zone also marked scores 110,
        // never 160: zone credit is ignored once the top counts.
        let ascent = Ascent {
            top: true,
            attempts_top: 1,
            zone_high: true,
            attempts_zone_high: 1,
            ..Ascent::default()
        };
        assert_eq!(compute_score(&rules(), Some(&ascent)), 110);
    }

    #[test]
    fn test_high_zone_dominates_low_zone() {
        let ascent = Ascent {
            zone_high: true,
            attempts_zone_high: 3,
            zone_low: true,
            attempts_zone_low: 1,
            ..Ascent::default()
        };
        assert_eq!(compute_score(&rules(), Some(&ascent)), 50);
    }

    #[test]
    fn test_zone_without_rule_falls_through() {
        // High zone achieved on a problem that only awards a low zone.
        let only_low = ProblemRuleSet {
            points_zone_high: None,
            ..rules()
        };
        let ascent = Ascent {
            zone_high: true,
            zone_low: true,
            ..Ascent::default()
        };
        assert_eq!(compute_score(&only_low, Some(&ascent)), 25);
    }

    #[test]
    fn test_extreme_rule_values_saturate() {
        let rules = ProblemRuleSet {
            points_top: u32::MAX,
            points_zone_high: None,
            points_zone_low: None,
            flash_bonus: Some(10),
        };
        assert_eq!(compute_score(&rules, Some(&Ascent::flash())), u32::MAX);
    }

    #[test]
    fn test_low_zone_only() {
        let ascent = Ascent {
            zone_low: true,
            attempts_zone_low: 7,
            ..Ascent::default()
        };
        assert_eq!(compute_score(&rules(), Some(&ascent)), 25);
    }

    prop_compose! {
        fn arb_rules()(
            points_top in 0u32..10_000,
            zone_high in proptest::option::of(0u32..10_000),
            zone_low in proptest::option::of(0u32..10_000),
            flash in proptest::option::of(0u32..1_000),
        ) -> ProblemRuleSet {
            ProblemRuleSet {
                points_top,
                points_zone_high: zone_high,
                points_zone_low: zone_low,
                flash_bonus: flash,
            }
        }
    }

    prop_compose! {
        fn arb_ascent()(
            top in any::<bool>(),
            attempts_top in 0u32..20,
            zone_high in any::<bool>(),
            attempts_zone_high in 0u32..20,
            zone_low in any::<bool>(),
            attempts_zone_low in 0u32..20,
        ) -> Ascent {
            Ascent {
                top,
                attempts_top,
                zone_high,
                attempts_zone_high,
                zone_low,
                attempts_zone_low,
            }
        }
    }

    proptest! {
        // Scoring is deterministic and bounded by the rule set's values.
        #[test]
        fn prop_score_total_and_bounded(rules in arb_rules(), ascent in arb_ascent()) {
            let score = compute_score(&rules, Some(&ascent));
            prop_assert_eq!(score, compute_score(&rules, Some(&ascent)));

            let max = rules.points_top.saturating_add(rules.flash_bonus.unwrap_or(0));
            let max = max
                .max(rules.points_zone_high.unwrap_or(0))
                .max(rules.points_zone_low.unwrap_or(0));
            prop_assert!(score <= max);
        }

        // A topped ascent scores at least the top points regardless of
        // zone state.
        #[test]
        fn prop_top_scores_top_points(rules in arb_rules(), mut ascent in arb_ascent()) {
            ascent.top = true;
            let score = compute_score(&rules, Some(&ascent));
            prop_assert!(score >= rules.points_top);
        }
    }
}
