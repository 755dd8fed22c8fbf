use thiserror::Error;

/// Command-line errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    GrammarError(#[from] cadence_grammar::GrammarError),

    #[error(transparent)]
    EngineError(#[from] cadence_engine::EngineError),

    #[error("Invalid IR: {0}")]
    IrError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
