//! French to English-grammar text rewriting.
//!
//! The table is ordered most specific first: `jours ouvrés` is rewritten
//! before `jours`, `sauf les jours fériés` before `sauf`, and so on. Every
//! entry is a whole-word regex applied to the lower-cased text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::error::{NormalizeError, NormalizeErrorKind, NormalizeResult};

const WEEKDAYS: &[(&str, &str)] = &[
    ("lundi", "monday"),
    ("mardi", "tuesday"),
    ("mercredi", "wednesday"),
    ("jeudi", "thursday"),
    ("vendredi", "friday"),
    ("samedi", "saturday"),
    ("dimanche", "sunday"),
];

const MONTHS: &[(&str, &str)] = &[
    ("janvier", "january"),
    ("f[ée]vrier", "february"),
    ("mars", "march"),
    ("avril", "april"),
    ("mai", "may"),
    ("juin", "june"),
    ("juillet", "july"),
    ("ao[uû]t", "august"),
    ("septembre", "september"),
    ("octobre", "october"),
    ("novembre", "november"),
    ("d[ée]cembre", "december"),
];

const ORDINALS: &[(&str, &str)] = &[
    ("premi(?:er|[eè]re)", "first"),
    ("deuxi[eè]me", "second"),
    ("troisi[eè]me", "third"),
    ("quatri[eè]me", "fourth"),
    ("cinqui[eè]me", "fifth"),
    ("derni(?:er|[eè]re)", "last"),
];

const EN_WEEKDAYS: &str = "monday|tuesday|wednesday|thursday|friday|saturday|sunday";

/// Words that must not survive normalization.
const RESIDUE_WORDS: &[&str] = &[
    "a", "alors", "au", "aux", "chaque", "de", "des", "du", "entre", "et", "la", "le", "les",
    "ou", "puis", "sauf", "si", "tous", "toutes",
];

static ZONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+/[^)]+)\)\s*$").expect("Invalid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

static SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(build_substitutions);

enum Rewrite {
    Template(String),
    With(fn(&Captures<'_>) -> String),
}

struct Substitution {
    pattern: Regex,
    rewrite: Rewrite,
}

impl Substitution {
    fn apply(&self, text: &str) -> String {
        match &self.rewrite {
            Rewrite::Template(template) => self
                .pattern
                .replace_all(text, template.as_str())
                .into_owned(),
            Rewrite::With(rewrite) => self.pattern.replace_all(text, *rewrite).into_owned(),
        }
    }
}

fn build_substitutions() -> Vec<Substitution> {
    let mut table = Vec::new();
    let mut add = |pattern: &str, rewrite: Rewrite| {
        table.push(Substitution {
            pattern: Regex::new(pattern).expect("Invalid regex"),
            rewrite,
        });
    };
    let template = |text: &str| Rewrite::Template(text.to_string());

    // 10h, 8h30
    add(r"\b(\d{1,2})h(\d{2})?\b", Rewrite::With(clock));
    add(r"\bà\b", template(" a "));
    add(r"\s*,\s*et\s+", template(", and "));

    // date and time windows
    add(
        r"\bentre\s+le\s+(\d{4}-\d{2}-\d{2})\s+et\s+le\s+(\d{4}-\d{2}-\d{2})\b",
        template("between ${1} and ${2}"),
    );
    add(
        r"\bdu\s+(\d{4}-\d{2}-\d{2})\s+au\s+(\d{4}-\d{2}-\d{2})\b",
        template("between ${1} and ${2}"),
    );
    add(
        r"\bentre\s+(\d{2}:\d{2})\s+et\s+(\d{2}:\d{2})\b",
        template("between ${1} and ${2}"),
    );
    add(
        r"\bjusqu'?au\s+(\d{4}-\d{2}-\d{2})\b",
        template("until ${1}"),
    );

    // weekend shift
    add(
        r"\bsi\s+(?:le\s+)?week-?end\s*,?\s+alors\s+(?:le\s+)?lundi\s+suivant\b",
        template("if weekend then next monday"),
    );
    add(
        r"\bsi\s+(?:le\s+)?week-?end\s*,?\s+alors\s+(?:le\s+)?prochain\s+jour\s+ouvr[ée]\b",
        template("if weekend then next business day"),
    );
    add(
        r",\s*(if\s+weekend\s+then\s+next\s+(?:monday|business\s+day))\b",
        template(" ${1}"),
    );
    add(r",\s*$", template(""));

    add(
        r"\bsauf\s+(?:les\s+)?jours\s+f[ée]ri[ée]s\b",
        template("except public holidays"),
    );

    // quantifiers and units
    add(r"\b(?:tous|toutes)\s+les\b", template("every"));
    add(r"\bchaque\b", template("every"));
    add(r"\bjours?\s+ouvr[ée]s?\b", template("weekday"));
    add(r"\bjours\b", template("days"));
    add(r"\bjour\b", template("day"));
    add(r"\bsemaines\b", template("weeks"));
    add(r"\bsemaine\b", template("week"));
    add(r"\bheures\b", template("hours"));
    add(r"\bheure\b", template("hour"));
    add(r"\bevery\s+days\b", template("every day"));
    add(r"\bevery\s+weekdays\b", template("every weekday"));
    add(r"\bevery\s+hours\b", template("every hour"));
    add(r"\bevery\s+minutes\b", template("every minute"));
    add(r"\bevery\s+weeks\b", template("every week"));
    add(r"\bmois\b", template("month"));
    add(r"\b(?:années|ans)\b", template("years"));
    add(r"\b(?:année|an)\b", template("year"));
    add(r"\bevery\s+years\b", template("every year"));

    // ordinals, weekday and month names
    add(r"\b1er\b", template("1st"));
    for &(fr, en) in ORDINALS {
        add(&format!(r"\b{fr}\b"), template(en));
    }
    for &(fr, en) in WEEKDAYS {
        add(&format!(r"\b{fr}s?\b"), template(en));
    }
    for &(fr, en) in MONTHS {
        add(
            &format!(r"\b(?:d'|de\s+){fr}\b"),
            Rewrite::Template(format!("of {en}")),
        );
    }

    // connectives
    add(r"\bet\b", template("and"));
    add(r"\bsauf\b", template("except"));
    add(r"\bexcept\s+(?:le|les)\b", template("except"));
    add(r"\s*,\s*", template(", "));
    add(r"\s+", template(" "));
    add(r"^\s+|\s+$", template(""));

    // structural fix-ups on the English text
    add(
        r"^(every\s+(?:day|weekday))\s*,\s*every\s+(\d+)\s+(hours|minutes)\s+between\b",
        template("${1} every ${2} ${3} between"),
    );
    add(r"\bevery\s+month\s+le\b", template("every month on the"));
    add(r"\bevery\s+month\s+(\S+)", Rewrite::With(every_month_on_the));
    add(r"\bevery\s+year\s+le\b", template("every year on"));
    add(r"\sa\s+(\d{2}:\d{2})", template(" at ${1}"));
    add(r"\ble\s+(\d{4}-\d{2}-\d{2})\b", template("${1}"));
    add(&format!(r"\ble\s+({EN_WEEKDAYS})\b"), template("${1}"));
    add(
        &format!(r"\bevery\s+(\d+)\s+weeks\s+({EN_WEEKDAYS})\b"),
        template("every ${1} weeks on ${2}"),
    );
    add(
        r"\bevery\s+year\s+on\s+(first|second|third|fourth|fifth|last)\b",
        template("every year on the ${1}"),
    );

    table
}

/// `9h` to `09:00`, `8h30` to `08:30`.
fn clock(caps: &Captures<'_>) -> String {
    let hour = caps.get(1).map_or("0", |m| m.as_str());
    let minute = caps.get(2).map_or("00", |m| m.as_str());
    format!("{hour:0>2}:{minute}")
}

fn every_month_on_the(caps: &Captures<'_>) -> String {
    match caps.get(1).map(|m| m.as_str()) {
        Some("on") | None => caps.get(0).map_or_else(String::new, |m| m.as_str().to_string()),
        Some(next) => format!("every month on the {next}"),
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Splits a trailing `(Area/City)` zone off, keeping its spelling.
fn split_zone(text: &str) -> (&str, Option<&str>) {
    ZONE_RE
        .captures(text)
        .and_then(|caps| Some((caps.get(0)?.start(), caps.get(1)?.as_str().trim())))
        .map_or((text, None), |(start, zone)| (text[..start].trim_end(), Some(zone)))
}

/// First word that is still French after rewriting.
fn residue(text: &str) -> Option<&str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty())
        .find(|word| {
            RESIDUE_WORDS.contains(word) || word.contains('\'') || !word.is_ascii()
        })
}

/// ## Summary
/// Rewrites a French schedule into the English rule grammar.
///
/// A trailing `(Zone/Name)` becomes ` in Zone/Name`.
///
/// ## Errors
/// Returns `NoRuleMatched` if no substitution changed the text, and
/// `UnrecognizedPhrase` naming the first French word left over.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn normalize_fr(text: &str) -> NormalizeResult<String> {
    let collapsed = collapse_whitespace(&text.replace('\u{2019}', "'"));
    let (body, zone) = split_zone(&collapsed);
    let body = body.to_lowercase();

    let mut english = SUBSTITUTIONS
        .iter()
        .fold(body.clone(), |current, substitution| substitution.apply(&current));

    if english == body {
        return Err(NormalizeError::new(NormalizeErrorKind::NoRuleMatched, body));
    }

    if let Some(word) = residue(&english) {
        tracing::warn!(residue = %word, english = %english, "French phrase left untranslated");
        return Err(NormalizeError::new(
            NormalizeErrorKind::UnrecognizedPhrase,
            word,
        ));
    }

    if let Some(zone) = zone {
        english.push_str(" in ");
        english.push_str(zone);
    }

    tracing::debug!(english = %english, "Normalized French schedule");
    Ok(english)
}
