//! Recurrence grammar: English parser, French normalizer, language detection,
//! and the schedule IR they produce.

pub mod error;
pub mod grammar;

pub use error::{GrammarError, GrammarResult};
pub use grammar::ir::{IrRule, IrSchedule};
pub use grammar::timezone::{DEFAULT_TZ, resolve_timezone};
pub use grammar::{
    Language, detect, normalize_fr, parse_rule, parse_schedule, parse_schedule_as,
    parse_schedule_en, parse_schedule_en_in, parse_schedule_fr, parse_schedule_fr_in,
    parse_schedule_in,
};
