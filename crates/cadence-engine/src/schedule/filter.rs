//! Per-candidate post-processing: weekend shift, then exclusions, then the
//! date window.

use cadence_grammar::grammar::ir::{IrConstraints, WeekendShift};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// ## Summary
/// Moves a Saturday or Sunday to the following Monday. Weekdays are left alone.
///
/// Both shift modes land on Monday because no holiday calendar is consulted.
#[must_use]
pub fn shift_date(date: NaiveDate, shift: WeekendShift) -> NaiveDate {
    match shift {
        WeekendShift::None => date,
        WeekendShift::NextMonday | WeekendShift::NextBusinessDay => {
            let mut shifted = date;
            while is_weekend(shifted) {
                match shifted.checked_add_days(Days::new(1)) {
                    Some(next) => shifted = next,
                    None => break,
                }
            }
            shifted
        }
    }
}

/// Outcome of running one candidate through a rule's constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted(NaiveDateTime),
    Excluded,
    OutsideWindow,
}

/// ## Summary
/// Shifts `candidate`, then checks it against the exclusion lists and the
/// date window. Time of day is never changed.
#[must_use]
pub fn admit(candidate: NaiveDateTime, constraints: &IrConstraints) -> Admission {
    let date = shift_date(candidate.date(), constraints.weekend_shift);
    if date != candidate.date() {
        tracing::trace!(from = %candidate.date(), to = %date, "Shifted off the weekend");
    }

    if constraints.except.excludes(date) {
        tracing::trace!(date = %date, "Candidate excluded");
        return Admission::Excluded;
    }
    if constraints
        .window_date
        .is_some_and(|window| !window.contains(date))
    {
        tracing::trace!(date = %date, "Candidate outside date window");
        return Admission::OutsideWindow;
    }

    Admission::Accepted(date.and_time(candidate.time()))
}
