//! Command-line front-end over the grammar and the engine.

pub mod cli;
pub mod error;
