//! Value tokens of the English grammar: times, dates, weekdays, months,
//! ordinals and counts. Every function takes one lower-cased token.

use chrono::{NaiveDate, NaiveTime, Weekday};
use regex::Regex;
use std::num::NonZeroU16;
use std::sync::LazyLock;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?::(\d{2}))?(am|pm)?$").expect("Invalid regex")
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("Invalid regex")
});

static MONTH_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-(\d{2})$").expect("Invalid regex"));

static DAY_OF_MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(st|nd|rd|th)?$").expect("Invalid regex")
});

/// Parses `HH:MM` (24-hour) or `H[:MM]am|pm` (12-hour).
///
/// `12am` is midnight and `12pm` is noon. A bare hour without a meridiem is
/// rejected.
#[must_use]
pub fn parse_time(word: &str) -> Option<NaiveTime> {
    let caps = TIME_RE.captures(word)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    let hour = match caps.get(3).map(|m| m.as_str()) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            if meridiem == "pm" {
                hour % 12 + 12
            } else {
                hour % 12
            }
        }
        None => {
            caps.get(2)?;
            hour
        }
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parses a `YYYY-MM-DD` calendar date.
#[must_use]
pub fn parse_date(word: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(word)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a yearly `MM-DD`. The day must exist in a leap year.
#[must_use]
pub fn parse_month_day(word: &str) -> Option<(u8, i8)> {
    let caps = MONTH_DAY_RE.captures(word)?;
    let month: u8 = caps.get(1)?.as_str().parse().ok()?;
    let day: i8 = caps.get(2)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(2000, u32::from(month), u32::try_from(day).ok()?)?;
    Some((month, day))
}

/// Parses a day of month: `1st`..`31st` or a bare number.
#[must_use]
pub fn parse_day_of_month(word: &str) -> Option<i8> {
    let caps = DAY_OF_MONTH_RE.captures(word)?;
    let day: i8 = caps.get(1)?.as_str().parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

#[must_use]
pub fn parse_weekday(word: &str) -> Option<Weekday> {
    match word {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Month name to its number, 1 = January.
#[must_use]
pub fn parse_month(word: &str) -> Option<u8> {
    let month = match word {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        "december" => 12,
        _ => return None,
    };
    Some(month)
}

/// Ordinal word to a position within the month: 1..=5, or -1 for `last`.
#[must_use]
pub fn parse_ordinal(word: &str) -> Option<i8> {
    match word {
        "first" | "1st" => Some(1),
        "second" | "2nd" => Some(2),
        "third" | "3rd" => Some(3),
        "fourth" | "4th" => Some(4),
        "fifth" | "5th" => Some(5),
        "last" => Some(-1),
        _ => None,
    }
}

/// Parses a strictly positive count. Zero is rejected.
#[must_use]
pub fn parse_count(word: &str) -> Option<NonZeroU16> {
    if !word.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    word.parse().ok()
}
