use std::io::Write;
use std::path::{Path, PathBuf};

use cadence_engine::{Engine, next_occurrences, validate};
use cadence_grammar::grammar::ir::IrSchedule;
use cadence_grammar::{
    GrammarError, Language, detect, normalize_fr, parse_schedule_as, parse_schedule_in,
};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{AppError, AppResult};

#[derive(Parser, Debug)]
#[command(name = "cadence")]
#[command(about = "Parse recurrence rules and compute their next occurrences", long_about = None)]
pub struct Cli {
    /// Input language; `auto` detects it and falls back to the other one
    #[arg(long, global = true, value_enum, default_value_t = LangArg::Auto)]
    pub lang: LangArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the JSON IR of a schedule
    Parse { text: String },

    /// Rewrite a French schedule into the English grammar
    Normalize { text: String },

    /// Print the detected language (`en` or `fr`)
    Detect { text: String },

    /// Print the next occurrences, one RFC 3339 instant per line
    Next {
        /// Schedule text; omit when using --ir
        text: Option<String>,

        /// Search start (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_instant)]
        from: Option<DateTime<Utc>>,

        /// Number of occurrences
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Read the schedule from a JSON IR file
        #[arg(long, conflicts_with = "text")]
        ir: Option<PathBuf>,
    },

    /// Check that every rule can fire; exits with status 1 otherwise
    Validate {
        /// Schedule text; omit when using --ir
        text: Option<String>,

        /// Search start (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_instant)]
        from: Option<DateTime<Utc>>,

        /// Read the schedule from a JSON IR file
        #[arg(long, conflicts_with = "text")]
        ir: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangArg {
    Auto,
    En,
    Fr,
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| format!("expected an RFC 3339 instant: {err}"))
}

/// ## Summary
/// Runs one command, writing its output to `out`.
///
/// Returns `false` when `validate` rejects the schedule; the rejection is
/// written to `out` rather than returned as an error.
///
/// ## Errors
/// Parse, normalization, engine, I/O, and IR decoding failures.
pub fn run(cli: &Cli, engine: &Engine, out: &mut impl Write) -> AppResult<bool> {
    tracing::debug!(command = ?cli.command, lang = ?cli.lang, "Running command");

    match &cli.command {
        Command::Parse { text } => {
            let schedule = parse_text(text, cli.lang, engine)?;
            writeln!(out, "{}", schedule.to_json()?)?;
        }
        Command::Normalize { text } => {
            let english = normalize_fr(text).map_err(GrammarError::from)?;
            writeln!(out, "{english}")?;
        }
        Command::Detect { text } => {
            writeln!(out, "{}", detect(text))?;
        }
        Command::Next {
            text,
            from,
            count,
            ir,
        } => {
            let schedule = load_schedule(text.as_deref(), ir.as_deref(), cli.lang, engine)?;
            let from = from.unwrap_or_else(Utc::now);
            for occurrence in next_occurrences(&schedule, from, *count, engine.horizon_days())? {
                writeln!(out, "{}", occurrence.instant.to_rfc3339())?;
            }
        }
        Command::Validate { text, from, ir } => {
            let schedule = load_schedule(text.as_deref(), ir.as_deref(), cli.lang, engine)?;
            let from = from.unwrap_or_else(Utc::now);
            match validate(&schedule, from, engine.horizon_days()) {
                Ok(()) => writeln!(out, "valid")?,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    return Ok(false);
                }
            }
        }
    }

    Ok(true)
}

fn parse_text(text: &str, lang: LangArg, engine: &Engine) -> AppResult<IrSchedule> {
    let tz = engine.default_tz();
    let schedule = match lang {
        LangArg::Auto => parse_schedule_in(text, tz)?,
        LangArg::En => parse_schedule_as(text, Language::En, tz)?,
        LangArg::Fr => parse_schedule_as(text, Language::Fr, tz)?,
    };
    Ok(schedule)
}

fn load_schedule(
    text: Option<&str>,
    ir: Option<&Path>,
    lang: LangArg,
    engine: &Engine,
) -> AppResult<IrSchedule> {
    match (text, ir) {
        (_, Some(path)) => {
            let json = std::fs::read_to_string(path)?;
            tracing::debug!(path = %path.display(), "Reading schedule IR");
            Ok(IrSchedule::from_json(&json)?)
        }
        (Some(text), None) => parse_text(text, lang, engine),
        (None, None) => Err(AppError::InvalidArgument(
            "a schedule text or --ir file is required".to_string(),
        )),
    }
}
