//! French normalization error types.

use std::fmt;

/// Result type for French normalization.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// A French schedule the substitution table could not translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeError {
    /// The kind of error.
    pub kind: NormalizeErrorKind,
    /// Text that was left untranslated.
    pub fragment: String,
}

impl NormalizeError {
    #[must_use]
    pub fn new(kind: NormalizeErrorKind, fragment: impl Into<String>) -> Self {
        Self {
            kind,
            fragment: fragment.into(),
        }
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at `{}`", self.kind, self.fragment)
    }
}

impl std::error::Error for NormalizeError {}

/// The kind of normalization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizeErrorKind {
    /// No substitution changed the text.
    NoRuleMatched,
    /// French words survived every substitution.
    UnrecognizedPhrase,
}

impl fmt::Display for NormalizeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRuleMatched => write!(f, "no French phrase recognized"),
            Self::UnrecognizedPhrase => write!(f, "unrecognized French phrase"),
        }
    }
}
