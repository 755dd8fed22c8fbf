use cadence_test::component::constants::DEFAULT_HORIZON_DAYS;
use cadence_test::component::engine::{
    EngineError, NoOccurrenceReason, is_valid, next_occurrence, validate,
};

use super::helpers::{parse, reference_instant};

#[test_log::test]
fn self_contradictory_rules_fail_validation() {
    for text in [
        "every day at 10:00 until 2026-03-13 except 2026-03-13",
        "every day at 18:00 between 2026-03-12 and 2026-03-12 except 2026-03-12",
    ] {
        let schedule = parse(text);
        let err =
            validate(&schedule, reference_instant(), DEFAULT_HORIZON_DAYS).expect_err(text);
        assert!(
            matches!(
                err,
                EngineError::NoOccurrence {
                    rule_index: Some(0),
                    reason: NoOccurrenceReason::FilteredOut
                }
            ),
            "{text:?}: {err}"
        );
        assert!(next_occurrence(&schedule, reference_instant(), DEFAULT_HORIZON_DAYS).is_err());
    }
}

#[test]
fn ended_rule_does_not_invalidate_the_schedule() {
    let schedule = parse("every day at 10:00, and every day at 10:00 until 2020-01-01");
    assert!(validate(&schedule, reference_instant(), DEFAULT_HORIZON_DAYS).is_ok());

    let ended = parse("every day at 10:00 until 2020-01-01");
    let err = validate(&ended, reference_instant(), DEFAULT_HORIZON_DAYS)
        .expect_err("the rule has ended");
    assert!(matches!(
        err,
        EngineError::NoOccurrence {
            rule_index: Some(0),
            reason: NoOccurrenceReason::FilteredOut
        }
    ));
}

#[test]
fn static_checks_still_apply_to_every_rule() {
    let schedule = parse("every day at 10:00, and 2026-03-13 at 10:00 except friday");
    let err = validate(&schedule, reference_instant(), DEFAULT_HORIZON_DAYS)
        .expect_err("the one-shot is excluded");
    assert!(matches!(
        err,
        EngineError::NoOccurrence {
            rule_index: Some(1),
            ..
        }
    ));
}

#[test]
fn holiday_exclusion_is_refused() {
    let schedule = parse("every weekday at 09:00 except public holidays");
    assert!(!is_valid(&schedule, reference_instant(), DEFAULT_HORIZON_DAYS));
    assert!(matches!(
        next_occurrence(&schedule, reference_instant(), DEFAULT_HORIZON_DAYS),
        Err(EngineError::HolidaysNotImplemented { rule_index: 0 })
    ));
}
