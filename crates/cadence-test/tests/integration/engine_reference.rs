use cadence_test::component::constants::DEFAULT_HORIZON_DAYS;
use cadence_test::component::engine::{Engine, next_occurrence, next_occurrences, validate};

use super::helpers::{paris, paris_local, parse, reference_instant};

include!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/schedule_cases_data/mod.rs"));

/// ## Summary
/// Every reference rule validates and fires at its expected wall-clock time.
#[test_log::test]
fn schedule_cases_reference() {
    let (year, month, day, hour, minute) = REFERENCE_LOCAL;
    let from = paris(year, month, day, hour, minute);
    assert_eq!(from, reference_instant());

    let mut failures = Vec::new();
    for case in schedule_cases() {
        let schedule = parse(case.text);
        if let Err(err) = validate(&schedule, from, DEFAULT_HORIZON_DAYS) {
            failures.push(format!("{:?}: validate failed: {err}", case.text));
            continue;
        }
        match next_occurrence(&schedule, from, DEFAULT_HORIZON_DAYS) {
            Ok(occurrence) if paris_local(&occurrence) == case.expected_local => {}
            Ok(occurrence) => failures.push(format!(
                "{:?}: got {} ({}), expected {}",
                case.text,
                paris_local(&occurrence),
                occurrence.instant.to_rfc3339(),
                case.expected_local
            )),
            Err(err) => failures.push(format!("{:?}: {err}", case.text)),
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test_log::test]
fn engine_facade_matches_free_functions() {
    let engine = Engine::default();
    let from = Some(reference_instant());

    for case in schedule_cases().iter().take(10) {
        let occurrence = engine.next_occurrence(case.text, from).expect("fires");
        assert_eq!(paris_local(&occurrence), case.expected_local, "{:?}", case.text);
        assert!(engine.is_valid(case.text, from));
    }
}

#[test]
fn next_occurrences_are_increasing() {
    let schedule =
        parse("every weekday at 09:00, and every saturday at 10:30, and 2026-03-14 at 10:30");
    let occurrences =
        next_occurrences(&schedule, reference_instant(), 6, DEFAULT_HORIZON_DAYS).expect("fires");

    let local: Vec<String> = occurrences.iter().map(paris_local).collect();
    assert_eq!(
        local,
        [
            "2026-03-13T09:00",
            "2026-03-14T10:30",
            "2026-03-16T09:00",
            "2026-03-17T09:00",
            "2026-03-18T09:00",
            "2026-03-19T09:00",
        ]
    );
    assert_eq!(occurrences[1].rule_index, 1);
}

#[test]
fn french_rules_fire_like_english_ones() {
    let engine = Engine::default();
    let from = Some(reference_instant());

    let fr = engine
        .next_occurrence("Tous les mois le dernier vendredi à 18h", from)
        .expect("fires");
    let en = engine
        .next_occurrence("every month on the last friday at 18:00", from)
        .expect("fires");
    assert_eq!(fr, en);
    assert_eq!(paris_local(&fr), "2026-03-27T18:00");
}
