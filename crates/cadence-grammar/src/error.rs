use thiserror::Error;

use crate::grammar::en::ParseError;
use crate::grammar::fr::NormalizeError;

/// Errors surfaced by the text-to-IR pipelines.
#[derive(Error, Debug, Clone)]
pub enum GrammarError {
    /// English text did not match the grammar (including text produced by
    /// the French normalizer).
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// French text could not be rewritten into the English grammar.
    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),
}

pub type GrammarResult<T> = std::result::Result<T, GrammarError>;
