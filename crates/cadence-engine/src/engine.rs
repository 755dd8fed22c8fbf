//! Text-or-IR facade with configured defaults.

use std::borrow::Cow;

use cadence_core::config::Settings;
use cadence_core::constants::DEFAULT_HORIZON_DAYS;
use cadence_core::error::CoreError;
use cadence_grammar::grammar::ir::IrSchedule;
use cadence_grammar::grammar::timezone::{DEFAULT_TZ, resolve_timezone};
use cadence_grammar::parse_schedule_in;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::EngineResult;
use crate::schedule::{self, Occurrence};

/// A schedule given either as rule text (English or French) or as IR.
#[derive(Debug, Clone, Copy)]
pub enum ScheduleInput<'a> {
    Text(&'a str),
    Ir(&'a IrSchedule),
}

impl<'a> From<&'a str> for ScheduleInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for ScheduleInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a IrSchedule> for ScheduleInput<'a> {
    fn from(schedule: &'a IrSchedule) -> Self {
        Self::Ir(schedule)
    }
}

/// Evaluates schedules with a fallback zone for text input and a search horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    default_tz: Tz,
    horizon_days: u32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_TZ, DEFAULT_HORIZON_DAYS)
    }
}

impl Engine {
    #[must_use]
    pub const fn new(default_tz: Tz, horizon_days: u32) -> Self {
        Self {
            default_tz,
            horizon_days,
        }
    }

    /// ## Summary
    /// Builds an engine from the `schedule` section of the settings.
    ///
    /// ## Errors
    /// Returns `EngineError::Config` if the configured zone is unknown.
    pub fn from_settings(settings: &Settings) -> EngineResult<Self> {
        let name = &settings.schedule.default_timezone;
        let default_tz = resolve_timezone(name)
            .ok_or_else(|| CoreError::ConfigError(format!("Unknown default timezone: {name}")))?;
        Ok(Self::new(default_tz, settings.schedule.horizon_days))
    }

    #[must_use]
    pub const fn default_tz(&self) -> Tz {
        self.default_tz
    }

    #[must_use]
    pub const fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// ## Summary
    /// Parses text input with language detection; IR input is borrowed as is.
    ///
    /// ## Errors
    /// Returns `EngineError::Grammar` if the text does not parse.
    pub fn schedule<'a>(&self, input: ScheduleInput<'a>) -> EngineResult<Cow<'a, IrSchedule>> {
        match input {
            ScheduleInput::Text(text) => Ok(Cow::Owned(parse_schedule_in(text, self.default_tz)?)),
            ScheduleInput::Ir(schedule) => Ok(Cow::Borrowed(schedule)),
        }
    }

    /// ## Summary
    /// Next occurrence strictly after `from`, or after now when `from` is `None`.
    ///
    /// ## Errors
    /// Parse errors for text input, then see [`schedule::next_occurrence`].
    pub fn next_occurrence<'a>(
        &self,
        input: impl Into<ScheduleInput<'a>>,
        from: Option<DateTime<Utc>>,
    ) -> EngineResult<Occurrence> {
        let ir = self.schedule(input.into())?;
        schedule::next_occurrence(&ir, from.unwrap_or_else(Utc::now), self.horizon_days)
    }

    /// ## Summary
    /// Up to `count` consecutive occurrences after `from` (or now).
    ///
    /// ## Errors
    /// Parse errors for text input, then see [`schedule::next_occurrences`].
    pub fn next_occurrences<'a>(
        &self,
        input: impl Into<ScheduleInput<'a>>,
        from: Option<DateTime<Utc>>,
        count: usize,
    ) -> EngineResult<Vec<Occurrence>> {
        let ir = self.schedule(input.into())?;
        schedule::next_occurrences(
            &ir,
            from.unwrap_or_else(Utc::now),
            count,
            self.horizon_days,
        )
    }

    /// ## Summary
    /// Checks that every rule can fire within the horizon after `from` (or now).
    ///
    /// ## Errors
    /// Parse errors for text input, then see [`schedule::validate`].
    pub fn validate<'a>(
        &self,
        input: impl Into<ScheduleInput<'a>>,
        from: Option<DateTime<Utc>>,
    ) -> EngineResult<()> {
        let ir = self.schedule(input.into())?;
        schedule::validate(&ir, from.unwrap_or_else(Utc::now), self.horizon_days)
    }

    /// Boolean form of [`Engine::validate`]; unparseable text is not valid.
    #[must_use]
    pub fn is_valid<'a>(
        &self,
        input: impl Into<ScheduleInput<'a>>,
        from: Option<DateTime<Utc>>,
    ) -> bool {
        self.validate(input, from).is_ok()
    }
}
