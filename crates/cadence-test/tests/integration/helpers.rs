#![allow(dead_code, clippy::expect_used)]
//! Test helpers for integration tests.
//!
//! Instants are built and printed as Europe/Paris wall-clock time, the zone
//! every schedule defaults to.

use cadence_test::component::engine::Occurrence;
use cadence_test::component::grammar::ir::IrSchedule;
use cadence_test::component::grammar::parse_schedule;
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Paris wall-clock time as an absolute instant.
pub fn paris(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Tz::Europe__Paris
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("unambiguous Paris time")
        .with_timezone(&Utc)
}

/// Thursday 2026-03-12 12:00 in Paris.
pub fn reference_instant() -> DateTime<Utc> {
    paris(2026, 3, 12, 12, 0)
}

/// Occurrence as `YYYY-MM-DDTHH:MM` in Paris, whatever zone it was computed in.
pub fn paris_local(occurrence: &Occurrence) -> String {
    occurrence
        .instant
        .with_timezone(&Tz::Europe__Paris)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

pub fn parse(text: &str) -> IrSchedule {
    parse_schedule(text).unwrap_or_else(|err| panic!("{text:?} should parse: {err}"))
}
