//! Earliest-occurrence search.

use cadence_grammar::grammar::ir::{IrOneshot, IrRecurring, IrRule, IrSchedule, WeekendShift};
use chrono::{DateTime, Days, DurationRound, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::check::check_rule;
use super::expand::Expansion;
use super::filter::{Admission, admit};
use super::localize::localize;
use crate::error::{EngineError, EngineResult, NoOccurrenceReason};

/// Days looked back before the anchor when a weekend shift can pull an
/// earlier Saturday or Sunday forward.
const SHIFT_LOOKBACK_DAYS: u64 = 2;

/// One occurrence of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// The instant, in the schedule's zone.
    pub instant: DateTime<Tz>,
    /// Position in `rules` of the rule that produced it.
    pub rule_index: usize,
}

/// ## Summary
/// Returns the earliest occurrence strictly after `from`.
///
/// Every rule is searched up to `horizon_days` after `from` (oneshots are not
/// horizon-bound). Equal instants from two rules go to the rule declared first.
///
/// ## Errors
/// Fails on the first rule with holiday exclusion or out-of-range values.
/// Returns `NoOccurrence` when no rule produces a candidate.
#[tracing::instrument(skip(schedule), fields(tz = %schedule.tz.name(), rules = schedule.rules.len()))]
pub fn next_occurrence(
    schedule: &IrSchedule,
    from: DateTime<Utc>,
    horizon_days: u32,
) -> EngineResult<Occurrence> {
    let mut best: Option<Occurrence> = None;
    let mut reasons = Vec::new();

    for (rule_index, rule) in schedule.rules.iter().enumerate() {
        match next_for_rule(rule, rule_index, schedule.tz, from, horizon_days) {
            Ok(instant) => {
                if best.as_ref().is_none_or(|current| instant < current.instant) {
                    best = Some(Occurrence {
                        instant,
                        rule_index,
                    });
                }
            }
            Err(EngineError::NoOccurrence { reason, .. }) => reasons.push(reason),
            Err(err) => return Err(err),
        }
    }

    if let Some(occurrence) = best {
        tracing::debug!(
            instant = %occurrence.instant.to_rfc3339(),
            rule_index = occurrence.rule_index,
            "Next occurrence found"
        );
        return Ok(occurrence);
    }

    Err(schedule_exhausted(&reasons))
}

/// ## Summary
/// Returns up to `count` consecutive occurrences after `from`.
///
/// Stops early, without error, once the schedule runs out after at least one
/// occurrence was found.
///
/// ## Errors
/// Same as [`next_occurrence`] for the first occurrence.
pub fn next_occurrences(
    schedule: &IrSchedule,
    from: DateTime<Utc>,
    count: usize,
    horizon_days: u32,
) -> EngineResult<Vec<Occurrence>> {
    let mut occurrences: Vec<Occurrence> = Vec::with_capacity(count);
    let mut cursor = from;

    while occurrences.len() < count {
        match next_occurrence(schedule, cursor, horizon_days) {
            Ok(occurrence) => {
                cursor = occurrence.instant.with_timezone(&Utc);
                occurrences.push(occurrence);
            }
            Err(err) if err.is_no_occurrence() && !occurrences.is_empty() => break,
            Err(err) => return Err(err),
        }
    }

    Ok(occurrences)
}

fn schedule_exhausted(reasons: &[NoOccurrenceReason]) -> EngineError {
    let reason = match reasons {
        [first, rest @ ..] if rest.iter().all(|reason| reason == first) => *first,
        _ => NoOccurrenceReason::HorizonExhausted,
    };
    EngineError::NoOccurrence {
        rule_index: (reasons.len() == 1).then_some(0),
        reason,
    }
}

/// ## Summary
/// Earliest instant of a single rule strictly after `from`.
///
/// ## Errors
/// See [`check_rule`]; `NoOccurrence` when the rule produces nothing.
fn next_for_rule(
    rule: &IrRule,
    rule_index: usize,
    tz: Tz,
    from: DateTime<Utc>,
    horizon_days: u32,
) -> EngineResult<DateTime<Tz>> {
    check_rule(rule, rule_index)?;

    match rule {
        IrRule::Oneshot(oneshot) => next_oneshot(oneshot, rule_index, tz, from),
        IrRule::Recurring(recurring) => {
            next_recurring(recurring, rule_index, tz, from, horizon_days)
        }
    }
}

fn exhausted(rule_index: usize, reason: NoOccurrenceReason) -> EngineError {
    tracing::debug!(rule_index, reason = %reason, "Rule has no next occurrence");
    EngineError::no_occurrence(rule_index, reason)
}

/// The admitted, localized oneshot instant, regardless of `from`.
pub(crate) fn oneshot_instant(
    oneshot: &IrOneshot,
    tz: Tz,
) -> Result<DateTime<Tz>, NoOccurrenceReason> {
    match admit(oneshot.at, &oneshot.constraints) {
        Admission::Accepted(local) => Ok(localize(local, tz)),
        Admission::Excluded | Admission::OutsideWindow => Err(NoOccurrenceReason::FilteredOut),
    }
}

fn next_oneshot(
    oneshot: &IrOneshot,
    rule_index: usize,
    tz: Tz,
    from: DateTime<Utc>,
) -> EngineResult<DateTime<Tz>> {
    match oneshot_instant(oneshot, tz) {
        Ok(instant) if instant > from => Ok(instant),
        Ok(_) => Err(exhausted(rule_index, NoOccurrenceReason::FilteredOut)),
        Err(reason) => Err(exhausted(rule_index, reason)),
    }
}

fn next_recurring(
    rule: &IrRecurring,
    rule_index: usize,
    tz: Tz,
    from: DateTime<Utc>,
    horizon_days: u32,
) -> EngineResult<DateTime<Tz>> {
    let from_local = from.with_timezone(&tz).naive_local();
    let constraints = &rule.constraints;
    let shifted = constraints.weekend_shift != WeekendShift::None;

    let anchor = search_anchor(rule, from_local);
    let expansion = Expansion::build(rule, anchor).map_err(|err| EngineError::Expansion {
        rule_index,
        message: err.to_string(),
    })?;
    if expansion.is_unreachable() {
        return Err(exhausted(rule_index, NoOccurrenceReason::FilteredOut));
    }

    let horizon_end = from_local
        .date()
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX);
    let window_end = constraints.window_date.and_then(|window| window.effective_end());
    let (last_date, reason) = match window_end {
        Some(end) if end < horizon_end => (end, NoOccurrenceReason::FilteredOut),
        _ => (horizon_end, NoOccurrenceReason::HorizonExhausted),
    };

    let mut best: Option<(NaiveDateTime, DateTime<Tz>)> = None;
    for candidate in expansion.candidates() {
        if candidate.date() > last_date {
            break;
        }
        if let Some((best_local, _)) = best
            && candidate.date() > best_local.date()
        {
            break;
        }

        if !expansion.matches_time(candidate)
            || (rule.is_time_filtered()
                && rule
                    .between_time
                    .is_some_and(|between| !between.contains(candidate.time())))
        {
            continue;
        }

        let Admission::Accepted(local) = admit(candidate, constraints) else {
            continue;
        };
        let instant = localize(local, tz);
        if instant <= from {
            continue;
        }

        if !shifted {
            return Ok(instant);
        }
        if best.is_none_or(|(_, current)| instant < current) {
            best = Some((local, instant));
        }
    }

    best.map(|(_, instant)| instant)
        .ok_or_else(|| exhausted(rule_index, reason))
}

/// Where interval counting starts: the later of `from` (to the minute) and
/// the window's first midnight, pulled back when a weekend shift applies.
fn search_anchor(rule: &IrRecurring, from_local: NaiveDateTime) -> NaiveDateTime {
    let from_minute = from_local
        .duration_trunc(TimeDelta::minutes(1))
        .unwrap_or(from_local);

    let window_start = rule
        .constraints
        .window_date
        .and_then(|window| window.start)
        .map(|start| start.and_time(NaiveTime::MIN));
    let anchor = window_start.map_or(from_minute, |start| start.max(from_minute));

    // interval 1 only, so the lookback never changes which periods are counted
    if rule.constraints.weekend_shift != WeekendShift::None && rule.interval.get() == 1 {
        return anchor
            .checked_sub_days(Days::new(SHIFT_LOOKBACK_DAYS))
            .unwrap_or(anchor);
    }
    anchor
}
