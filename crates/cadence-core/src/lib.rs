//! Shared constants, errors, and configuration for the cadence workspace.

pub mod config;
pub mod constants;
pub mod error;
