//! Base rule shapes, tried in declaration order. The first shape that
//! matches up to a clause boundary wins; there is no backtracking between
//! shapes.

use std::collections::BTreeSet;
use std::num::NonZeroU16;

use chrono::{NaiveTime, Weekday};

use super::lexer::{Cursor, MatchResult};
use super::values::{
    parse_count, parse_date, parse_day_of_month, parse_month, parse_month_day, parse_ordinal,
    parse_time, parse_weekday,
};
use crate::grammar::ir::{
    BUSINESS_WEEKDAYS, Frequency, IrBetweenTime, IrConstraints, IrOneshot, IrRecurring, IrRule,
    IrStep, weekday_index,
};

type Matcher = for<'t, 'a> fn(&mut Cursor<'t, 'a>) -> MatchResult<IrRule>;

/// A named base rule shape.
pub struct Shape {
    pub name: &'static str,
    pub matcher: Matcher,
}

pub const SHAPES: &[Shape] = &[
    Shape {
        name: "oneshot",
        matcher: oneshot,
    },
    Shape {
        name: "every-day",
        matcher: every_day,
    },
    Shape {
        name: "every-weekday",
        matcher: every_weekday,
    },
    Shape {
        name: "weekday-list",
        matcher: weekday_list,
    },
    Shape {
        name: "every-n-units",
        matcher: every_n_units,
    },
    Shape {
        name: "hourly-between",
        matcher: hourly_between,
    },
    Shape {
        name: "step-within-day",
        matcher: step_within_day,
    },
    Shape {
        name: "monthly",
        matcher: monthly,
    },
    Shape {
        name: "yearly-date",
        matcher: yearly_date,
    },
    Shape {
        name: "yearly-nth-weekday",
        matcher: yearly_nth_weekday,
    },
];

const TIME: &str = "a time such as 09:00 or 3pm";
const WEEKDAY: &str = "a weekday name";

/// `DATE at TIME`
fn oneshot(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    let date = cursor.take(parse_date, "a YYYY-MM-DD date")?;
    cursor.expect("at")?;
    let time = cursor.take(parse_time, TIME)?;

    Ok(IrRule::Oneshot(IrOneshot {
        at: date.and_time(time),
        constraints: IrConstraints::default(),
    }))
}

/// `every day at TIMES`
fn every_day(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    cursor.expect("every")?;
    cursor.expect("day")?;
    cursor.expect("at")?;

    let mut rule = IrRecurring::new(Frequency::Daily);
    rule.times = times(cursor)?;
    Ok(IrRule::Recurring(rule))
}

/// `every weekday at TIMES`, Monday to Friday.
fn every_weekday(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    cursor.expect("every")?;
    cursor.expect("weekday")?;
    cursor.expect("at")?;

    let mut rule = IrRecurring::new(Frequency::Daily);
    rule.byweekday = BUSINESS_WEEKDAYS.into_iter().collect();
    rule.times = times(cursor)?;
    Ok(IrRule::Recurring(rule))
}

/// `every WEEKDAYS at TIMES`
fn weekday_list(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    cursor.expect("every")?;
    let days = weekdays(cursor)?;
    cursor.expect("at")?;

    let mut rule = IrRecurring::new(Frequency::Weekly);
    rule.byweekday = days;
    rule.times = times(cursor)?;
    Ok(IrRule::Recurring(rule))
}

/// `every N (minutes|hours|days|weeks) [on WEEKDAYS] [at TIMES]`, or
/// `every minute` / `every hour`.
fn every_n_units(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    cursor.expect("every")?;

    let (freq, interval) = if cursor.eat("minute") {
        (Frequency::Minutely, NonZeroU16::MIN)
    } else if cursor.eat("hour") {
        (Frequency::Hourly, NonZeroU16::MIN)
    } else {
        let interval = count(cursor)?;
        let freq = cursor.take(
            |word| match word {
                "minute" | "minutes" => Some(Frequency::Minutely),
                "hour" | "hours" => Some(Frequency::Hourly),
                "day" | "days" => Some(Frequency::Daily),
                "week" | "weeks" => Some(Frequency::Weekly),
                _ => None,
            },
            "minutes, hours, days or weeks",
        )?;
        (freq, interval)
    };

    let mut rule = IrRecurring::new(freq);
    rule.interval = interval;
    if cursor.eat("on") {
        rule.byweekday = weekdays(cursor)?;
    }
    if cursor.eat("at") {
        rule.times = times(cursor)?;
    }
    Ok(IrRule::Recurring(rule))
}

/// `every (hour | N hours) between TIME and TIME`
fn hourly_between(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    cursor.expect("every")?;

    let interval = if cursor.eat("hour") {
        NonZeroU16::MIN
    } else {
        let interval = count(cursor)?;
        cursor.take(
            |word| matches!(word, "hour" | "hours").then_some(()),
            "hours",
        )?;
        interval
    };

    let mut rule = IrRecurring::new(Frequency::Hourly);
    rule.interval = interval;
    rule.between_time = Some(time_range(cursor)?);
    Ok(IrRule::Recurring(rule))
}

/// `every (day|weekday) every N (hours|minutes) between TIME and TIME`
fn step_within_day(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    cursor.expect("every")?;
    let business_days_only = cursor.take(
        |word| match word {
            "day" => Some(false),
            "weekday" => Some(true),
            _ => None,
        },
        "day or weekday",
    )?;
    cursor.expect("every")?;
    let n = count(cursor)?;
    let step = cursor.take(
        |word| match word {
            "hour" | "hours" => Some(IrStep::Hours(n)),
            "minute" | "minutes" => Some(IrStep::Minutes(n)),
            _ => None,
        },
        "hours or minutes",
    )?;

    let mut rule = IrRecurring::new(Frequency::Daily);
    if business_days_only {
        rule.byweekday = BUSINESS_WEEKDAYS.into_iter().collect();
    }
    rule.step = Some(step);
    rule.between_time = Some(time_range(cursor)?);
    Ok(IrRule::Recurring(rule))
}

/// `every month on the (last day | ORDINALS WEEKDAY | DAYS) at TIMES`
fn monthly(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    cursor.expect("every")?;
    cursor.expect("month")?;
    cursor.expect("on")?;
    cursor.expect("the")?;

    let mut rule = IrRecurring::new(Frequency::Monthly);
    if cursor.peek() == Some("last") && cursor.peek_nth(1) == Some("day") {
        cursor.advance();
        cursor.advance();
        rule.bymonthday.insert(-1);
    } else {
        let start = cursor.pos();
        if let Ok((positions, day)) = nth_weekday(cursor) {
            rule.bysetpos = positions;
            rule.byweekday.insert(weekday_index(day));
        } else {
            cursor.reset(start);
            rule.bymonthday = cursor
                .take_list(parse_day_of_month, "a day of month such as 1st or 15th")?
                .into_iter()
                .collect();
        }
    }

    cursor.expect("at")?;
    rule.times = times(cursor)?;
    Ok(IrRule::Recurring(rule))
}

/// `every year on MM-DD at TIMES`
fn yearly_date(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    cursor.expect("every")?;
    cursor.expect("year")?;
    cursor.expect("on")?;
    let (month, day) = cursor.take(parse_month_day, "a MM-DD date")?;
    cursor.expect("at")?;

    let mut rule = IrRecurring::new(Frequency::Yearly);
    rule.bymonth.insert(month);
    rule.bymonthday.insert(day);
    rule.times = times(cursor)?;
    Ok(IrRule::Recurring(rule))
}

/// `every year on the ORDINALS WEEKDAY of MONTH at TIMES`
fn yearly_nth_weekday(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrRule> {
    cursor.expect("every")?;
    cursor.expect("year")?;
    cursor.expect("on")?;
    cursor.expect("the")?;
    let (positions, day) = nth_weekday(cursor)?;
    cursor.expect("of")?;
    let month = cursor.take(parse_month, "a month name")?;
    cursor.expect("at")?;

    let mut rule = IrRecurring::new(Frequency::Yearly);
    rule.bymonth.insert(month);
    rule.byweekday.insert(weekday_index(day));
    rule.bysetpos = positions;
    rule.times = times(cursor)?;
    Ok(IrRule::Recurring(rule))
}

fn times(cursor: &mut Cursor<'_, '_>) -> MatchResult<BTreeSet<NaiveTime>> {
    Ok(cursor.take_list(parse_time, TIME)?.into_iter().collect())
}

fn weekdays(cursor: &mut Cursor<'_, '_>) -> MatchResult<BTreeSet<u8>> {
    Ok(cursor
        .take_list(parse_weekday, WEEKDAY)?
        .into_iter()
        .map(weekday_index)
        .collect())
}

fn count(cursor: &mut Cursor<'_, '_>) -> MatchResult<NonZeroU16> {
    cursor.take(parse_count, "a positive number")
}

/// `ORDINALS WEEKDAY`, e.g. `first and third monday`.
fn nth_weekday(cursor: &mut Cursor<'_, '_>) -> MatchResult<(BTreeSet<i8>, Weekday)> {
    let positions = cursor
        .take_list(parse_ordinal, "an ordinal such as first or last")?
        .into_iter()
        .collect();
    let day = cursor.take(parse_weekday, WEEKDAY)?;
    Ok((positions, day))
}

/// `between TIME and TIME`
fn time_range(cursor: &mut Cursor<'_, '_>) -> MatchResult<IrBetweenTime> {
    cursor.expect("between")?;
    let start = cursor.take(parse_time, TIME)?;
    cursor.expect("and")?;
    let end = cursor.take(parse_time, TIME)?;
    Ok(IrBetweenTime { start, end })
}
