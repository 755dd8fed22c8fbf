//! Static rule checks run before any candidate is generated.

use std::collections::BTreeSet;

use cadence_grammar::grammar::ir::{
    Frequency, IrConstraints, IrRecurring, IrRule, WeekendShift,
};

use crate::error::{EngineError, EngineResult, NoOccurrenceReason};

const SATURDAY: u8 = 5;
const SUNDAY: u8 = 6;
const MONDAY: u8 = 0;

/// ## Summary
/// Rejects rules the engine cannot or will not evaluate.
///
/// Holiday exclusion is checked first, then value ranges (an IR read from
/// JSON is not guaranteed to come from the parser), then emptiness.
///
/// ## Errors
/// `HolidaysNotImplemented`, `InvalidRule`, or `NoOccurrence` with
/// `EmptyWindow`, `EmptyTimeWindow` or `AllWeekdaysExcluded`.
pub fn check_rule(rule: &IrRule, rule_index: usize) -> EngineResult<()> {
    let constraints = rule.constraints();
    if constraints.except.holidays.enabled {
        return Err(EngineError::HolidaysNotImplemented { rule_index });
    }

    check_constraints(constraints, rule_index)?;
    if let IrRule::Recurring(recurring) = rule {
        check_ranges(recurring, rule_index)?;
    }

    if constraints.window_date.is_some_and(|window| window.is_empty()) {
        return Err(EngineError::no_occurrence(
            rule_index,
            NoOccurrenceReason::EmptyWindow,
        ));
    }

    if let IrRule::Recurring(recurring) = rule {
        if recurring.between_time.is_some_and(|between| between.is_empty()) {
            return Err(EngineError::no_occurrence(
                rule_index,
                NoOccurrenceReason::EmptyTimeWindow,
            ));
        }
        if landing_weekdays(recurring).is_subset(&constraints.except.weekdays) {
            return Err(EngineError::no_occurrence(
                rule_index,
                NoOccurrenceReason::AllWeekdaysExcluded,
            ));
        }
    }

    Ok(())
}

fn check_constraints(constraints: &IrConstraints, rule_index: usize) -> EngineResult<()> {
    if constraints.except.weekdays.iter().any(|day| *day > SUNDAY) {
        return Err(EngineError::invalid_rule(
            rule_index,
            "except weekdays must be 0 (Monday) to 6 (Sunday)",
        ));
    }
    Ok(())
}

fn check_ranges(rule: &IrRecurring, rule_index: usize) -> EngineResult<()> {
    let invalid = |message: &str| Err(EngineError::invalid_rule(rule_index, message));

    if rule.bymonth.iter().any(|month| !(1..=12).contains(month)) {
        return invalid("bymonth values must be 1 to 12");
    }
    if rule.byweekday.iter().any(|day| *day > SUNDAY) {
        return invalid("byweekday values must be 0 (Monday) to 6 (Sunday)");
    }
    if rule
        .bymonthday
        .iter()
        .any(|day| *day != -1 && !(1..=31).contains(day))
    {
        return invalid("bymonthday values must be 1 to 31, or -1");
    }
    if rule
        .bysetpos
        .iter()
        .any(|pos| *pos != -1 && !(1..=5).contains(pos))
    {
        return invalid("bysetpos values must be 1 to 5, or -1");
    }
    if !rule.bysetpos.is_empty() {
        if rule.byweekday.is_empty() {
            return invalid("bysetpos needs a weekday");
        }
        if !matches!(rule.freq, Frequency::Monthly | Frequency::Yearly) {
            return invalid("bysetpos applies to monthly and yearly rules only");
        }
    }
    if rule.step.is_some() {
        if rule.between_time.is_none() {
            return invalid("step needs a between_time range");
        }
        if rule.freq.is_sub_daily() {
            return invalid("step applies to day-granular rules only");
        }
    }
    Ok(())
}

/// Weekdays a rule's candidates can fall on once shifted.
fn landing_weekdays(rule: &IrRecurring) -> BTreeSet<u8> {
    let generated: BTreeSet<u8> = if rule.byweekday.is_empty() {
        (MONDAY..=SUNDAY).collect()
    } else {
        rule.byweekday.clone()
    };

    match rule.constraints.weekend_shift {
        WeekendShift::None => generated,
        WeekendShift::NextMonday | WeekendShift::NextBusinessDay => generated
            .into_iter()
            .map(|day| if day == SATURDAY || day == SUNDAY { MONDAY } else { day })
            .collect(),
    }
}
