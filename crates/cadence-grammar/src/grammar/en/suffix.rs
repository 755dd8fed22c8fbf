//! Suffix clauses that follow a base rule in any order, and the except
//! clause, which may sit anywhere after the leading keywords.

use super::error::{ParseError, ParseResult};
use super::lexer::{Cursor, MatchResult, Token, fragment};
use super::values::{parse_date, parse_weekday};
use crate::grammar::ir::{IrExcept, IrWindowDate, WeekendShift, weekday_index};

/// Window and weekend-shift clauses collected after a base rule.
#[derive(Debug, Default)]
pub struct Suffixes {
    pub window: IrWindowDate,
    pub weekend_shift: Option<WeekendShift>,
}

enum Clause {
    Window(chrono::NaiveDate, chrono::NaiveDate),
    Until(chrono::NaiveDate),
    WeekendShift(WeekendShift),
}

/// Whether a suffix clause starts at `pos`.
///
/// `between` only opens a suffix when a date follows it; `between` followed
/// by a time belongs to the hourly and step shapes.
#[must_use]
pub fn is_suffix_start(tokens: &[Token<'_>], pos: usize) -> bool {
    let word = |offset: usize| tokens.get(pos + offset).map(|token| token.word.as_str());
    match word(0) {
        Some("between") => word(1).and_then(parse_date).is_some(),
        Some("until" | "if") => true,
        _ => false,
    }
}

/// ## Summary
/// Parses the window, until and weekend-shift clauses that remain after the
/// base rule.
///
/// ## Errors
/// Returns `UnrecognizedSuffix` for leftover or malformed text, and
/// `DuplicateSuffix` when a clause is repeated.
pub fn parse_suffixes(tokens: &[Token<'_>]) -> ParseResult<Suffixes> {
    let mut suffixes = Suffixes::default();
    let mut cursor = Cursor::new(tokens);

    while !cursor.is_at_end() {
        let start = cursor.pos();
        let clause = match cursor.peek() {
            Some("between") => date_window(&mut cursor),
            Some("until") => until(&mut cursor),
            Some("if") => weekend_shift(&mut cursor),
            _ => Err(cursor.mismatch("a suffix clause")),
        }
        .map_err(|mismatch| {
            tracing::trace!(expected = mismatch.expected, "Suffix did not parse");
            ParseError::unrecognized_suffix(fragment(&tokens[start..]))
        })?;
        let clause_text = || fragment(&tokens[start..cursor.pos()]);

        match clause {
            Clause::Window(from, to) => {
                if suffixes.window.start.is_some() {
                    return Err(ParseError::duplicate_suffix(clause_text(), "between"));
                }
                suffixes.window.start = Some(from);
                suffixes.window.end = Some(to);
            }
            Clause::Until(date) => {
                if suffixes.window.until.is_some() {
                    return Err(ParseError::duplicate_suffix(clause_text(), "until"));
                }
                suffixes.window.until = Some(date);
            }
            Clause::WeekendShift(shift) => {
                if suffixes.weekend_shift.is_some() {
                    return Err(ParseError::duplicate_suffix(clause_text(), "if weekend"));
                }
                suffixes.weekend_shift = Some(shift);
            }
        }
    }

    Ok(suffixes)
}

/// `between DATE and DATE`
fn date_window(cursor: &mut Cursor<'_, '_>) -> MatchResult<Clause> {
    cursor.expect("between")?;
    let from = cursor.take(parse_date, "a YYYY-MM-DD date")?;
    cursor.expect("and")?;
    let to = cursor.take(parse_date, "a YYYY-MM-DD date")?;
    Ok(Clause::Window(from, to))
}

/// `until DATE`
fn until(cursor: &mut Cursor<'_, '_>) -> MatchResult<Clause> {
    cursor.expect("until")?;
    let date = cursor.take(parse_date, "a YYYY-MM-DD date")?;
    Ok(Clause::Until(date))
}

/// `if weekend then next (monday | business day)`
fn weekend_shift(cursor: &mut Cursor<'_, '_>) -> MatchResult<Clause> {
    cursor.expect("if")?;
    cursor.expect("weekend")?;
    cursor.expect("then")?;
    cursor.expect("next")?;
    if cursor.eat("monday") {
        return Ok(Clause::WeekendShift(WeekendShift::NextMonday));
    }
    cursor.expect("business")?;
    cursor.expect("day")?;
    Ok(Clause::WeekendShift(WeekendShift::NextBusinessDay))
}

/// ## Summary
/// Removes every `except ...` run from a clause and collects its items.
///
/// Items are weekday names, `YYYY-MM-DD` dates, and `public holidays` (optionally
/// preceded by `on`), separated by commas, `and`, or spaces. Separators after the
/// last item stay in the clause.
///
/// ## Errors
/// Returns `UnrecognizedSuffix` for an `except` with no items.
pub fn extract_except<'a>(tokens: &[Token<'a>]) -> ParseResult<(Vec<Token<'a>>, IrExcept)> {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut except = IrExcept::default();
    let mut idx = 0;

    while idx < tokens.len() {
        if tokens[idx].word != "except" {
            kept.push(tokens[idx].clone());
            idx += 1;
            continue;
        }

        let mut scan = idx + 1;
        let mut end = scan;
        while let Some(token) = tokens.get(scan) {
            let word = token.word.as_str();
            let at = scan;
            let next = |offset: usize| tokens.get(at + offset).map(|t| t.word.as_str());

            if let Some(day) = parse_weekday(word) {
                except.weekdays.insert(weekday_index(day));
                scan += 1;
            } else if let Some(date) = parse_date(word) {
                except.dates.insert(date);
                scan += 1;
            } else if word == "public" && next(1) == Some("holidays") {
                except.holidays.enabled = true;
                scan += 2;
            } else if word == "on" && next(1) == Some("public") && next(2) == Some("holidays") {
                except.holidays.enabled = true;
                scan += 3;
            } else if matches!(word, "," | "and") {
                scan += 1;
                continue;
            } else {
                break;
            }
            end = scan;
        }

        if end == idx + 1 {
            return Err(ParseError::unrecognized_suffix(fragment(&tokens[idx..])));
        }
        idx = end;
    }

    Ok((kept, except))
}
