//! French front-end: rewrites French text into the English grammar and
//! hands it to the English parser.

pub mod error;
mod normalize;

use chrono_tz::Tz;

pub use error::{NormalizeError, NormalizeErrorKind, NormalizeResult};
pub use normalize::normalize_fr;

use crate::error::GrammarResult;
use crate::grammar::en::{parse_rule_en, parse_schedule_en_in};
use crate::grammar::ir::{IrRule, IrSchedule};
use crate::grammar::timezone::DEFAULT_TZ;

/// ## Summary
/// Parses a French schedule in the default zone unless it ends with
/// `(Zone/Name)`.
///
/// ## Errors
/// Returns `GrammarError::Normalize` when the French text is not recognized,
/// and `GrammarError::Parse` when the rewritten English does not parse.
pub fn parse_schedule_fr(text: &str) -> GrammarResult<IrSchedule> {
    parse_schedule_fr_in(text, DEFAULT_TZ)
}

/// ## Summary
/// Parses a French schedule, using `default_tz` when no zone is given.
///
/// ## Errors
/// See [`parse_schedule_fr`].
pub fn parse_schedule_fr_in(text: &str, default_tz: Tz) -> GrammarResult<IrSchedule> {
    let english = normalize_fr(text)?;
    Ok(parse_schedule_en_in(&english, default_tz)?)
}

/// ## Summary
/// Parses a single French rule clause.
///
/// ## Errors
/// See [`parse_schedule_fr`].
pub fn parse_rule_fr(text: &str) -> GrammarResult<IrRule> {
    let english = normalize_fr(text)?;
    Ok(parse_rule_en(&english)?)
}
