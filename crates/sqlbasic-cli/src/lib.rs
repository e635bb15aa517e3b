//! Command-line front end for `sqlbasic-core`.
//!
//! The `sqlbasic` binary reads one statement from `--sql`, a file, or
//! standard input and then:
//!
//! - `check` reports whether it is valid and which category it falls in
//! - `dump` prints the canonical single-line form
//! - `format` prints the multi-line layout
//! - `tokens` lists the lexer's tokens
//! - `keywords` lists the reserved words

pub mod commands;
pub mod error;
pub mod input;
pub mod report;

pub use error::{CliError, Result};
pub use report::CheckReport;
