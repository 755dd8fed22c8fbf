//! Cadence recurrence rules - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `cadence_test::` paths.

pub mod component {
    pub use cadence_core::{config, constants};

    // Grammar front-ends and IR
    pub mod grammar {
        pub use cadence_grammar::grammar::ir;
        pub use cadence_grammar::{
            GrammarError, Language, detect, normalize_fr, parse_schedule, parse_schedule_en,
            parse_schedule_fr,
        };
    }

    // Occurrence search and validation
    pub mod engine {
        pub use cadence_engine::{
            Engine, EngineError, NoOccurrenceReason, Occurrence, is_valid, next_occurrence,
            next_occurrences, validate,
        };
    }
}
