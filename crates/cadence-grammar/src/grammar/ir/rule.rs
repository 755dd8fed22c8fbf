//! Rule-level IR types.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU16;

/// Weekday indices Monday through Friday.
pub const BUSINESS_WEEKDAYS: [u8; 5] = [0, 1, 2, 3, 4];

/// Recurrence frequency of a [`IrRecurring`] rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minutely => "minutely",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Frequencies that generate several instants within one day.
    #[must_use]
    pub const fn is_sub_daily(self) -> bool {
        matches!(self, Self::Minutely | Self::Hourly)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post-generation move applied to occurrences landing on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendShift {
    #[default]
    None,
    NextMonday,
    NextBusinessDay,
}

/// Inclusive time-of-day range.
///
/// Filters hourly rules; bounds the per-day sequence of step rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrBetweenTime {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl IrBetweenTime {
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// A range whose start lies after its end admits no time of day.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Fixed step of a step-within-day rule. Exactly one unit by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrStep {
    Hours(NonZeroU16),
    Minutes(NonZeroU16),
}

impl IrStep {
    #[must_use]
    pub fn as_time_delta(self) -> TimeDelta {
        match self {
            Self::Hours(n) => TimeDelta::hours(i64::from(n.get())),
            Self::Minutes(n) => TimeDelta::minutes(i64::from(n.get())),
        }
    }
}

/// Inclusive date bounds. `end` and `until` may both be present; the
/// earlier of the two wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IrWindowDate {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub until: Option<NaiveDate>,
}

impl IrWindowDate {
    /// Upper bound after applying `until` on top of `end`.
    #[must_use]
    pub fn effective_end(&self) -> Option<NaiveDate> {
        match (self.end, self.until) {
            (Some(end), Some(until)) => Some(end.min(until)),
            (end, until) => end.or(until),
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start)
            && self.effective_end().is_none_or(|end| date <= end)
    }

    /// True when the lower bound lies after the effective upper bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!((self.start, self.effective_end()), (Some(start), Some(end)) if start > end)
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.until.is_none()
    }
}

/// Public-holiday exclusion. Accepted by the grammar, refused by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IrHolidays {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IrExcept {
    /// Weekday indices, 0 = Monday.
    #[serde(default)]
    pub weekdays: BTreeSet<u8>,
    #[serde(default)]
    pub dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub holidays: IrHolidays,
}

impl IrExcept {
    /// Whether `date` is removed by the weekday or date lists.
    #[must_use]
    pub fn excludes(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date) || self.weekdays.contains(&weekday_index(date.weekday()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weekdays.is_empty() && self.dates.is_empty() && !self.holidays.enabled
    }

    pub fn merge(&mut self, other: Self) {
        self.weekdays.extend(other.weekdays);
        self.dates.extend(other.dates);
        if other.holidays.enabled {
            self.holidays.enabled = true;
        }
        if other.holidays.country.is_some() {
            self.holidays.country = other.holidays.country;
        }
    }
}

/// Suffix clauses shared by every rule kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IrConstraints {
    #[serde(default)]
    pub window_date: Option<IrWindowDate>,
    #[serde(default)]
    pub except: IrExcept,
    #[serde(default)]
    pub weekend_shift: WeekendShift,
}

/// A single local instant, localized with the schedule's zone at evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrOneshot {
    pub at: NaiveDateTime,
    #[serde(flatten)]
    pub constraints: IrConstraints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrRecurring {
    pub freq: Frequency,
    #[serde(default = "default_interval")]
    pub interval: NonZeroU16,
    /// Months, 1 = January.
    #[serde(default)]
    pub bymonth: BTreeSet<u8>,
    /// Weekday indices, 0 = Monday.
    #[serde(default)]
    pub byweekday: BTreeSet<u8>,
    /// Days of month, 1..=31, or -1 for the last day.
    #[serde(default)]
    pub bymonthday: BTreeSet<i8>,
    /// Position of the weekday within the month, 1..=5, or -1 for the last.
    #[serde(default)]
    pub bysetpos: BTreeSet<i8>,
    #[serde(default)]
    pub times: BTreeSet<NaiveTime>,
    #[serde(default)]
    pub between_time: Option<IrBetweenTime>,
    #[serde(default)]
    pub step: Option<IrStep>,
    #[serde(flatten)]
    pub constraints: IrConstraints,
}

impl IrRecurring {
    /// A bare rule of the given frequency with interval 1 and no filters.
    #[must_use]
    pub fn new(freq: Frequency) -> Self {
        Self {
            freq,
            interval: default_interval(),
            bymonth: BTreeSet::new(),
            byweekday: BTreeSet::new(),
            bymonthday: BTreeSet::new(),
            bysetpos: BTreeSet::new(),
            times: BTreeSet::new(),
            between_time: None,
            step: None,
            constraints: IrConstraints::default(),
        }
    }

    /// Step-within-day rules expand `between_time` at `step` on each permitted day.
    #[must_use]
    pub fn is_step_within_day(&self) -> bool {
        self.step.is_some() && self.between_time.is_some()
    }

    /// Hourly-between rules generate at `interval` and keep only times inside
    /// `between_time`.
    #[must_use]
    pub fn is_time_filtered(&self) -> bool {
        self.step.is_none() && self.between_time.is_some() && self.freq.is_sub_daily()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IrRule {
    Oneshot(IrOneshot),
    Recurring(IrRecurring),
}

impl IrRule {
    #[must_use]
    pub const fn constraints(&self) -> &IrConstraints {
        match self {
            Self::Oneshot(rule) => &rule.constraints,
            Self::Recurring(rule) => &rule.constraints,
        }
    }

    pub const fn constraints_mut(&mut self) -> &mut IrConstraints {
        match self {
            Self::Oneshot(rule) => &mut rule.constraints,
            Self::Recurring(rule) => &mut rule.constraints,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Oneshot(_) => "oneshot",
            Self::Recurring(_) => "recurring",
        }
    }
}

fn default_interval() -> NonZeroU16 {
    NonZeroU16::MIN
}

/// Index of a weekday in the IR, 0 = Monday .. 6 = Sunday.
#[must_use]
pub const fn weekday_index(day: Weekday) -> u8 {
    match day {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    }
}

#[must_use]
pub const fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}
