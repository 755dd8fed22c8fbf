//! Cross-crate tests: grammar coverage, French/English agreement, engine
//! reference cases, and the JSON interchange format.

mod engine_reference;
mod french_pairs;
mod grammar_catalogue;
mod helpers;
mod invalid;
mod ir_json;
