use cadence_test::component::grammar::ir::{IrRule, IrVersion};
use cadence_test::component::grammar::parse_schedule_en;

const SHAPES: &[&str] = &[
    // Times-bearing daily and weekly shapes
    "every day at 10:00",
    "every day at 9am and 6:30PM",
    "every 2 days at 10:00",
    "every weekday at 09:00",
    "every sunday at 10AM",
    "every monday and thursday at 18:00",
    "every saturday at 10:00, 14:00, 18:00",
    "every 3 weeks on monday at 08:30",
    // Step within day
    "every day every 2 hours between 09:00 and 17:00",
    "every weekday every 30 minutes between 12:00 and 14:00",
    // Hourly and minutely
    "every 2 hours between 09:00 and 17:00",
    "every hour between 18:00 and 23:00",
    "every 15 minutes",
    "every 6 hours",
    // Monthly
    "every month on the 1st at 09:00",
    "every month on the 2nd and 15th at 08:00",
    "every month on the last day at 20:00",
    "every month on the first monday at 09:00",
    "every month on the last friday at 18:00",
    // Yearly
    "every year on 03-14 at 10:00",
    "every year on the last sunday of october at 23:00",
    // One-shot
    "2026-03-13 at 2:00",
    // Suffixes
    "every weekday at 15:00 between 2026-02-01 and 2026-03-31",
    "every day at 10:00 until 2026-12-31",
    "every day at 10:00 except 2026-12-25, 2026-01-01",
    "every day except wednesday and sunday at 10:00",
    "every weekday at 09:00 except public holidays",
    "every month on the 1st at 09:00 if weekend then next monday",
    "every month on the 1st at 09:00 if weekend then next business day",
    "every day at 10:00 in America/New_York",
    "every day at 10:00 except friday until 2026-12-31 if weekend then next monday",
    // Composition
    "every weekday at 09:00, and every saturday at 10:30",
    "every day at 18:00, and 2026-03-13 at 02:00",
];

#[test_log::test]
fn every_catalogue_shape_parses_as_version_one() {
    for text in SHAPES {
        let schedule =
            parse_schedule_en(text).unwrap_or_else(|err| panic!("{text:?} should parse: {err}"));
        assert_eq!(schedule.version, IrVersion::V1, "{text:?}");
        assert!(!schedule.rules.is_empty(), "{text:?}");

        let json: serde_json::Value =
            serde_json::from_str(&schedule.to_json().expect("serializes")).expect("valid JSON");
        assert_eq!(json["version"], "1", "{text:?}");
    }
}

#[test]
fn rule_kinds_follow_the_text() {
    let schedule =
        parse_schedule_en("2026-03-12 at 13:00, and every day at 18:00, and every 15 minutes")
            .expect("parses");
    let kinds: Vec<&str> = schedule.rules.iter().map(IrRule::kind).collect();
    assert_eq!(kinds, ["oneshot", "recurring", "recurring"]);
}

#[test]
fn near_misses_are_rejected() {
    for text in [
        "",
        "every fortnight at 10:00",
        "every day at 25:00",
        "every day at 10:00 and then some",
        "every day at 10:00 in Mars/Olympus",
        "every 0 days at 10:00",
    ] {
        assert!(parse_schedule_en(text).is_err(), "{text:?} should not parse");
    }
}
