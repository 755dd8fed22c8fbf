//! English rule grammar.
//!
//! A schedule is one or more rules separated by `, and`, optionally followed
//! by `in <zone>`. Each rule is one base shape plus suffix clauses in any
//! order.

pub mod error;
mod lexer;
mod parser;
mod shapes;
mod suffix;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::{parse_rule_en, parse_schedule_en, parse_schedule_en_in};
