//! SQL Parser
//!
//! A hand-written recursive descent parser with precedence climbing for
//! expressions and two tokens of lookahead.

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::ParseError;
pub use parser::Parser;

use crate::ast::Statement;

/// Parses exactly one SQL statement, optionally terminated by `;`.
///
/// # Errors
///
/// Returns the first lexical or syntax error in `sql`.
pub fn parse(sql: &str) -> Result<Statement, ParseError> {
    Parser::new(sql)?.parse_statement()
}
