//! Raw candidate generation for recurring rules.
//!
//! The recurrence library works on local civil time passed through as UTC,
//! so no offset ever shifts a generated date. Localization happens later.

use cadence_grammar::grammar::ir::{Frequency, IrRecurring, weekday_from_index};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rrule::{NWeekday, RRule, RRuleError, RRuleSet, Tz as RRuleTz};

/// A recurring rule compiled for one search.
pub struct Expansion {
    set: RRuleSet,
    /// Times crossed with each generated date. `None` for sub-daily rules,
    /// whose generated instants already carry their time of day.
    day_times: Option<Vec<NaiveTime>>,
    /// Times a sub-daily instant must match, when the rule lists any. Only
    /// times on the rule's phase are kept, so `Some(empty)` never matches.
    time_filter: Option<Vec<NaiveTime>>,
}

impl Expansion {
    /// ## Summary
    /// Compiles `rule` with interval counting starting at `anchor`.
    ///
    /// Monthly rules start counting on the first of the anchor's month and
    /// yearly rules on January 1st, so positional selectors (the last Friday,
    /// the 31st) are never skipped for the anchor's own period.
    ///
    /// ## Errors
    /// Returns the recurrence library's error if it rejects the rule.
    pub fn build(rule: &IrRecurring, anchor: NaiveDateTime) -> Result<Self, RRuleError> {
        let start = period_start(rule.freq, anchor);
        let dt_start = start.and_utc().with_timezone(&RRuleTz::UTC);
        let set = recurrence(rule).build(dt_start)?;

        let (day_times, time_filter) = if rule.freq.is_sub_daily() {
            (None, sub_daily_filter(rule, anchor.time()))
        } else {
            (Some(day_times(rule, anchor.time())), None)
        };

        tracing::trace!(
            freq = %rule.freq,
            interval = rule.interval.get(),
            dt_start = %start,
            "Compiled recurrence"
        );

        Ok(Self {
            set,
            day_times,
            time_filter,
        })
    }

    /// Candidates in ascending local order, unbounded and unfiltered. The
    /// caller bounds the stream by date before applying [`Self::matches_time`].
    pub fn candidates(&self) -> Box<dyn Iterator<Item = NaiveDateTime> + '_> {
        let instants = (&self.set).into_iter().map(|dt| dt.naive_utc());
        match &self.day_times {
            Some(times) => Box::new(instants.flat_map(move |dt| {
                let date = dt.date();
                times.iter().map(move |time| date.and_time(*time))
            })),
            None => Box::new(instants),
        }
    }

    /// Whether a sub-daily candidate lands on one of the listed times.
    #[must_use]
    pub fn matches_time(&self, candidate: NaiveDateTime) -> bool {
        self.time_filter
            .as_ref()
            .is_none_or(|times| times.contains(&candidate.time()))
    }

    /// True when the rule lists times none of which its step can reach.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        self.time_filter.as_ref().is_some_and(Vec::is_empty)
    }
}

fn period_start(freq: Frequency, anchor: NaiveDateTime) -> NaiveDateTime {
    let date = anchor.date();
    let day = match freq {
        Frequency::Minutely | Frequency::Hourly => return anchor,
        Frequency::Daily | Frequency::Weekly => Some(date),
        Frequency::Monthly => date.with_day(1),
        Frequency::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1),
    };
    day.unwrap_or(date).and_time(NaiveTime::MIN)
}

fn recurrence(rule: &IrRecurring) -> RRule<rrule::Unvalidated> {
    let freq = match rule.freq {
        Frequency::Minutely => rrule::Frequency::Minutely,
        Frequency::Hourly => rrule::Frequency::Hourly,
        Frequency::Daily => rrule::Frequency::Daily,
        Frequency::Weekly => rrule::Frequency::Weekly,
        Frequency::Monthly => rrule::Frequency::Monthly,
        Frequency::Yearly => rrule::Frequency::Yearly,
    };

    let mut recurrence = RRule::new(freq).interval(rule.interval.get());

    if !rule.bymonth.is_empty() {
        let months: Vec<chrono::Month> = rule
            .bymonth
            .iter()
            .filter_map(|month| chrono::Month::try_from(*month).ok())
            .collect();
        recurrence = recurrence.by_month(&months);
    }
    if !rule.bymonthday.is_empty() {
        recurrence = recurrence.by_month_day(rule.bymonthday.iter().copied().collect());
    }

    let weekdays = rule.byweekday.iter().filter_map(|index| weekday_from_index(*index));
    let nweekdays: Vec<NWeekday> = if rule.bysetpos.is_empty() {
        weekdays.map(NWeekday::Every).collect()
    } else {
        // "the last friday" is the last Friday of the period, per weekday
        weekdays
            .flat_map(|day| {
                rule.bysetpos
                    .iter()
                    .map(move |pos| NWeekday::Nth(i16::from(*pos), day))
            })
            .collect()
    };
    if !nweekdays.is_empty() {
        recurrence = recurrence.by_weekday(nweekdays);
    }

    recurrence
}

/// Listed times a sub-daily rule can actually produce.
///
/// Generated times of day advance by the step modulo one day, so starting
/// from `anchor_time` they cover exactly the minutes congruent to it modulo
/// `gcd(step, 1440)`.
fn sub_daily_filter(rule: &IrRecurring, anchor_time: NaiveTime) -> Option<Vec<NaiveTime>> {
    if rule.times.is_empty() {
        return None;
    }

    let unit = if rule.freq == Frequency::Hourly { 60 } else { 1 };
    let period = gcd(u32::from(rule.interval.get()) * unit, MINUTES_PER_DAY);
    let anchor_minute = minute_of_day(anchor_time);

    Some(
        rule.times
            .iter()
            .copied()
            .filter(|time| {
                time.second() == 0
                    && time.nanosecond() == 0
                    && (minute_of_day(*time) + MINUTES_PER_DAY - anchor_minute) % period == 0
            })
            .collect(),
    )
}

const MINUTES_PER_DAY: u32 = 24 * 60;

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Times of day crossed with each generated date of a day-granular rule.
fn day_times(rule: &IrRecurring, anchor_time: NaiveTime) -> Vec<NaiveTime> {
    if let (Some(step), Some(between)) = (rule.step, rule.between_time) {
        let delta = step.as_time_delta();
        let mut times = Vec::new();
        let mut time = between.start;
        while time <= between.end {
            times.push(time);
            let (next, wrapped) = time.overflowing_add_signed(delta);
            if wrapped != 0 {
                break;
            }
            time = next;
        }
        return times;
    }

    if rule.times.is_empty() {
        vec![anchor_time]
    } else {
        rule.times.iter().copied().collect()
    }
}
