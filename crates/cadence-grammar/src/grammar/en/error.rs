//! English grammar parse error types.

use std::fmt;

/// Result type for English grammar parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error raised while matching English text against the rule grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// First piece of input that could not be matched.
    pub fragment: String,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, fragment: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            fragment: fragment.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ParseErrorKind::EmptyInput, "", "schedule text is empty")
    }

    #[must_use]
    pub fn empty_rule(fragment: impl Into<String>) -> Self {
        Self::new(
            ParseErrorKind::EmptyInput,
            fragment,
            "empty rule between `, and` separators",
        )
    }

    /// Creates an error for a clause no rule shape accepts.
    #[must_use]
    pub fn unmatched(fragment: impl Into<String>, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnmatchedRule,
            fragment,
            format!("no rule shape matches, expected {expected}"),
        )
    }

    #[must_use]
    pub fn unrecognized_suffix(fragment: impl Into<String>) -> Self {
        Self::new(
            ParseErrorKind::UnrecognizedSuffix,
            fragment,
            "text after the rule is not a date window, until, except or weekend clause",
        )
    }

    #[must_use]
    pub fn duplicate_suffix(fragment: impl Into<String>, clause: &str) -> Self {
        Self::new(
            ParseErrorKind::DuplicateSuffix,
            fragment,
            format!("`{clause}` clause given more than once"),
        )
    }

    #[must_use]
    pub fn invalid_timezone(zone: &str) -> Self {
        Self::new(
            ParseErrorKind::InvalidTimezone,
            zone,
            format!("`{zone}` is not an IANA timezone"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fragment.is_empty() {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            write!(f, "{} at `{}`: {}", self.kind, self.fragment, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Blank schedule, or a blank rule between separators.
    EmptyInput,
    /// No base rule shape matched the clause.
    UnmatchedRule,
    /// Leftover text after the base rule and its suffixes.
    UnrecognizedSuffix,
    /// A window, until or weekend clause appeared twice.
    DuplicateSuffix,
    /// The `in <zone>` suffix named an unknown zone.
    InvalidTimezone,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::UnmatchedRule => write!(f, "unmatched rule"),
            Self::UnrecognizedSuffix => write!(f, "unrecognized suffix"),
            Self::DuplicateSuffix => write!(f, "duplicate suffix"),
            Self::InvalidTimezone => write!(f, "invalid timezone"),
        }
    }
}
