pub mod detect;
pub mod en;
pub mod fr;
pub mod ir;
pub mod timezone;

use chrono_tz::Tz;

pub use detect::{Language, detect};
pub use en::{parse_rule_en, parse_schedule_en, parse_schedule_en_in};
pub use fr::{normalize_fr, parse_rule_fr, parse_schedule_fr, parse_schedule_fr_in};

use crate::error::GrammarResult;
use ir::{IrRule, IrSchedule};
use timezone::DEFAULT_TZ;

/// ## Summary
/// Parses a schedule in either language, detecting which one it is.
///
/// ## Errors
/// Returns the detected pipeline's error if neither pipeline accepts the text.
pub fn parse_schedule(text: &str) -> GrammarResult<IrSchedule> {
    parse_schedule_in(text, DEFAULT_TZ)
}

/// ## Summary
/// Auto-detecting parse with an explicit fallback zone.
///
/// The detected pipeline runs first; on failure the other one is tried.
///
/// ## Errors
/// Returns the detected pipeline's error if both pipelines fail.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn parse_schedule_in(text: &str, default_tz: Tz) -> GrammarResult<IrSchedule> {
    let primary = detect(text);
    parse_schedule_as(text, primary, default_tz).or_else(|err| {
        tracing::debug!(language = %primary, error = %err, "Primary pipeline failed, trying fallback");
        parse_schedule_as(text, primary.other(), default_tz).map_err(|_| err)
    })
}

/// ## Summary
/// Parses with a fixed pipeline and no fallback.
///
/// ## Errors
/// Returns that pipeline's parse or normalization error.
pub fn parse_schedule_as(text: &str, language: Language, default_tz: Tz) -> GrammarResult<IrSchedule> {
    match language {
        Language::En => Ok(parse_schedule_en_in(text, default_tz)?),
        Language::Fr => parse_schedule_fr_in(text, default_tz),
    }
}

/// ## Summary
/// Parses a single rule clause in either language.
///
/// ## Errors
/// Returns the detected pipeline's error if both pipelines fail.
pub fn parse_rule(text: &str) -> GrammarResult<IrRule> {
    let parse = |language| match language {
        Language::En => Ok(parse_rule_en(text)?),
        Language::Fr => parse_rule_fr(text),
    };
    let primary = detect(text);
    parse(primary).or_else(|err| parse(primary.other()).map_err(|_| err))
}
