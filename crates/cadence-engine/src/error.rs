use std::fmt;

use cadence_core::error::CoreError;
use cadence_grammar::GrammarError;
use serde::Serialize;
use thiserror::Error;

/// Engine errors. Parse failures pass through unchanged so callers can tell
/// malformed text apart from a schedule that never fires.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("Rule {rule_index}: public-holiday exclusion is not implemented")]
    HolidaysNotImplemented { rule_index: usize },

    #[error("No occurrence{}: {reason}", rule_label(.rule_index.as_ref()))]
    NoOccurrence {
        /// The rule that cannot fire, or `None` when no rule of the schedule can.
        rule_index: Option<usize>,
        reason: NoOccurrenceReason,
    },

    #[error("Rule {rule_index} is invalid: {message}")]
    InvalidRule { rule_index: usize, message: String },

    #[error("Rule {rule_index} could not be expanded: {message}")]
    Expansion { rule_index: usize, message: String },
}

impl EngineError {
    #[must_use]
    pub const fn no_occurrence(rule_index: usize, reason: NoOccurrenceReason) -> Self {
        Self::NoOccurrence {
            rule_index: Some(rule_index),
            reason,
        }
    }

    #[must_use]
    pub fn invalid_rule(rule_index: usize, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule_index,
            message: message.into(),
        }
    }

    /// True for the "parses, but never fires" family of failures.
    #[must_use]
    pub const fn is_no_occurrence(&self) -> bool {
        matches!(self, Self::NoOccurrence { .. })
    }
}

fn rule_label(rule_index: Option<&usize>) -> String {
    rule_index.map_or_else(String::new, |index| format!(" for rule {index}"))
}

/// Why a rule or schedule produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoOccurrenceReason {
    /// The date window starts after its effective end.
    EmptyWindow,
    /// The time-of-day range starts after it ends.
    EmptyTimeWindow,
    /// Every weekday the rule can land on is excluded.
    AllWeekdaysExcluded,
    /// Candidates exist but every one is excluded, outside the window, or not
    /// after the search start.
    FilteredOut,
    /// Nothing was found before the search horizon.
    HorizonExhausted,
}

impl fmt::Display for NoOccurrenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EmptyWindow => "date window starts after it ends",
            Self::EmptyTimeWindow => "time window starts after it ends",
            Self::AllWeekdaysExcluded => "every weekday is excluded",
            Self::FilteredOut => "every candidate is filtered out",
            Self::HorizonExhausted => "nothing within the search horizon",
        };
        f.write_str(text)
    }
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
