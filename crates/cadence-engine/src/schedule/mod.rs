//! Occurrence computation over the schedule IR.
//!
//! All arithmetic happens in the schedule's local civil time; instants are
//! produced only at the end, after shifting and filtering.

mod check;
mod expand;
mod filter;
mod localize;
mod next;
mod validate;

pub use check::check_rule;
pub use filter::shift_date;
pub use localize::localize;
pub use next::{Occurrence, next_occurrence, next_occurrences};
pub use validate::{is_valid, validate};
