//! English schedule text to IR.

use chrono_tz::Tz;

use super::error::{ParseError, ParseResult};
use super::lexer::{Cursor, Mismatch, Token, fragment, split_rules, tokenize};
use super::shapes::SHAPES;
use super::suffix::{extract_except, is_suffix_start, parse_suffixes};
use crate::grammar::ir::{IrRule, IrSchedule};
use crate::grammar::timezone::{DEFAULT_TZ, resolve_timezone};

/// ## Summary
/// Parses an English schedule in the default zone (`Europe/Paris`) unless it
/// ends with `in <zone>`.
///
/// ## Errors
/// Returns a [`ParseError`] naming the first fragment that did not match.
pub fn parse_schedule_en(text: &str) -> ParseResult<IrSchedule> {
    parse_schedule_en_in(text, DEFAULT_TZ)
}

/// ## Summary
/// Parses an English schedule, using `default_tz` when the text carries no
/// `in <zone>` suffix.
///
/// Rules are separated by `, and`; each is matched against the base shapes
/// in order, then its suffix clauses are collected.
///
/// ## Errors
/// Returns a [`ParseError`] for empty input, an unmatched rule, leftover or
/// repeated suffix text, or an unknown zone.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn parse_schedule_en_in(text: &str, default_tz: Tz) -> ParseResult<IrSchedule> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(ParseError::empty_input());
    }

    let (tokens, tz) = split_zone(&tokens, default_tz)?;
    if tokens.is_empty() {
        return Err(ParseError::empty_input());
    }

    let rules = split_rules(tokens)
        .into_iter()
        .map(parse_rule_tokens)
        .collect::<ParseResult<Vec<_>>>()?;

    tracing::debug!(tz = %tz.name(), rules = rules.len(), "Parsed English schedule");
    Ok(IrSchedule::new(tz, rules))
}

/// ## Summary
/// Parses a single rule clause with no zone suffix and no `, and` separator.
///
/// ## Errors
/// Returns a [`ParseError`] if the clause does not match exactly one shape.
pub fn parse_rule_en(text: &str) -> ParseResult<IrRule> {
    parse_rule_tokens(&tokenize(text))
}

/// Strips a trailing `in <zone>`; the zone keeps its original spelling.
fn split_zone<'t, 'a>(tokens: &'t [Token<'a>], default_tz: Tz) -> ParseResult<(&'t [Token<'a>], Tz)> {
    let len = tokens.len();
    if len >= 2 && tokens[len - 2].word == "in" {
        let zone = tokens[len - 1].raw;
        let tz = resolve_timezone(zone).ok_or_else(|| ParseError::invalid_timezone(zone))?;
        return Ok((&tokens[..len - 2], tz));
    }
    Ok((tokens, default_tz))
}

fn parse_rule_tokens(tokens: &[Token<'_>]) -> ParseResult<IrRule> {
    if tokens.is_empty() {
        return Err(ParseError::empty_rule(""));
    }

    let (tokens, except) = extract_except(tokens)?;
    let (mut rule, end) = match_shape(&tokens)?;
    let suffixes = parse_suffixes(&tokens[end..])?;

    let constraints = rule.constraints_mut();
    constraints.except = except;
    if !suffixes.window.is_unbounded() {
        constraints.window_date = Some(suffixes.window);
    }
    if let Some(shift) = suffixes.weekend_shift {
        constraints.weekend_shift = shift;
    }

    Ok(rule)
}

/// Tries every shape in order and returns the rule with the position where
/// its suffixes begin.
fn match_shape(tokens: &[Token<'_>]) -> ParseResult<(IrRule, usize)> {
    let mut furthest: Option<Mismatch> = None;

    for shape in SHAPES {
        let mut cursor = Cursor::new(tokens);
        let outcome = (shape.matcher)(&mut cursor).and_then(|rule| {
            if cursor.is_at_end() || is_suffix_start(tokens, cursor.pos()) {
                Ok(rule)
            } else {
                Err(cursor.mismatch("end of rule or a suffix clause"))
            }
        });

        match outcome {
            Ok(rule) => {
                tracing::debug!(shape = shape.name, "Rule shape matched");
                return Ok((rule, cursor.pos()));
            }
            Err(mismatch) => {
                tracing::trace!(shape = shape.name, pos = mismatch.pos, "Rule shape rejected");
                if furthest.is_none_or(|best| mismatch.pos > best.pos) {
                    furthest = Some(mismatch);
                }
            }
        }
    }

    let (pos, expected) = furthest.map_or((0, "a rule"), |m| (m.pos, m.expected));
    let unmatched = if pos < tokens.len() {
        fragment(&tokens[pos..])
    } else {
        fragment(tokens)
    };
    Err(ParseError::unmatched(unmatched, expected))
}
