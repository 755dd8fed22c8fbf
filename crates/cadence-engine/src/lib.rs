//! Scheduling engine: expands recurring rules, applies weekend shifts,
//! exclusions and date windows, and returns the earliest occurrence.

pub mod engine;
pub mod error;
pub mod schedule;

pub use engine::{Engine, ScheduleInput};
pub use error::{EngineError, EngineResult, NoOccurrenceReason};
pub use schedule::{Occurrence, is_valid, next_occurrence, next_occurrences, validate};
