use cadence_test::component::constants::DEFAULT_HORIZON_DAYS;
use cadence_test::component::engine::next_occurrences;
use cadence_test::component::grammar::ir::IrSchedule;

use super::helpers::{parse, paris};

include!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/schedule_cases_data/mod.rs"));

/// ## Summary
/// parse, serialize, deserialize: the engine cannot tell the difference.
#[test_log::test]
fn json_round_trip_is_lossless() {
    let (year, month, day, hour, minute) = REFERENCE_LOCAL;
    let from = paris(year, month, day, hour, minute);

    for case in schedule_cases() {
        let parsed = parse(case.text);
        let json = parsed.to_json().expect("serializes");
        let restored = IrSchedule::from_json(&json)
            .unwrap_or_else(|err| panic!("{:?} should deserialize: {err}\n{json}", case.text));
        assert_eq!(restored, parsed, "{:?}", case.text);

        assert_eq!(
            next_occurrences(&restored, from, 3, DEFAULT_HORIZON_DAYS).ok(),
            next_occurrences(&parsed, from, 3, DEFAULT_HORIZON_DAYS).ok(),
            "{:?}",
            case.text
        );
    }
}

#[test]
fn json_shape_is_stable() {
    let schedule =
        parse("every month on the last friday at 18:00 except 2026-03-27 in America/New_York");
    let value: serde_json::Value =
        serde_json::from_str(&schedule.to_json().expect("serializes")).expect("valid JSON");

    assert_eq!(value["tz"], "America/New_York");
    assert_eq!(value["version"], "1");

    let rule = &value["rules"][0];
    assert_eq!(rule["type"], "recurring");
    assert_eq!(rule["freq"], "monthly");
    assert_eq!(rule["byweekday"], serde_json::json!([4]));
    assert_eq!(rule["bysetpos"], serde_json::json!([-1]));
    assert_eq!(rule["except"]["dates"], serde_json::json!(["2026-03-27"]));
}

#[test]
fn hand_written_ir_is_accepted() {
    let json = r#"{
        "tz": "Europe/Paris",
        "rules": [
            { "type": "oneshot", "at": "2026-03-13T02:00:00" },
            { "type": "recurring", "freq": "daily", "times": ["18:00:00"] }
        ]
    }"#;
    let schedule = IrSchedule::from_json(json).expect("valid IR");
    assert_eq!(schedule, parse("2026-03-13 at 02:00, and every day at 18:00"));

    let unknown_zone = json.replace("Europe/Paris", "Mars/Olympus");
    assert!(IrSchedule::from_json(&unknown_zone).is_err());
}
