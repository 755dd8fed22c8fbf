use cadence_grammar::grammar::ir::{IrRule, IrSchedule};
use chrono::{DateTime, Utc};

use super::check::check_rule;
use super::next::{next_occurrence, oneshot_instant};
use crate::error::{EngineError, EngineResult};

/// ## Summary
/// Checks that `schedule` can fire.
///
/// Every rule is checked statically first: holiday exclusion, value ranges,
/// empty windows, and every weekday excluded. A oneshot must also survive its
/// own exclusions and window, wherever it lies in time. When the schedule has
/// recurring rules, at least one occurrence of the whole schedule must follow
/// `from` within `horizon_days`.
///
/// ## Errors
/// The first statically failing rule's error, in declaration order, then the
/// error of [`next_occurrence`].
#[tracing::instrument(skip(schedule), fields(tz = %schedule.tz.name(), rules = schedule.rules.len()))]
pub fn validate(schedule: &IrSchedule, from: DateTime<Utc>, horizon_days: u32) -> EngineResult<()> {
    for (rule_index, rule) in schedule.rules.iter().enumerate() {
        check_rule(rule, rule_index)?;
        if let IrRule::Oneshot(oneshot) = rule {
            oneshot_instant(oneshot, schedule.tz)
                .map_err(|reason| EngineError::no_occurrence(rule_index, reason))?;
        }
    }

    let recurring = schedule
        .rules
        .iter()
        .any(|rule| matches!(rule, IrRule::Recurring(_)));
    if recurring {
        next_occurrence(schedule, from, horizon_days)?;
    }

    tracing::debug!("Schedule is valid");
    Ok(())
}

/// Boolean form of [`validate`].
#[must_use]
pub fn is_valid(schedule: &IrSchedule, from: DateTime<Utc>, horizon_days: u32) -> bool {
    match validate(schedule, from, horizon_days) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "Schedule is not valid");
            false
        }
    }
}
