//! The subcommands, as functions from SQL text to printable output.

use sqlbasic_core::{check_sql, parse, pretty, Keyword, LexError, Lexer, ParseError};

use crate::error::Result;
use crate::report::CheckReport;

/// Validates `sql` and returns the report text plus whether it was valid.
///
/// # Errors
///
/// Returns an error if the JSON report cannot be serialized.
pub fn check(sql: &str, json: bool) -> Result<(String, bool)> {
    let report = CheckReport::new(&check_sql(sql));
    let output = if json {
        report.to_json()?
    } else {
        report.to_text()
    };
    Ok((output, report.valid))
}

/// Returns the canonical single-line form of `sql`.
///
/// # Errors
///
/// Returns the parse error if `sql` is not a valid statement.
pub fn dump(sql: &str) -> std::result::Result<String, ParseError> {
    Ok(parse(sql)?.to_string())
}

/// Returns the multi-line layout of `sql`.
///
/// # Errors
///
/// Returns the parse error if `sql` is not a valid statement.
pub fn format(sql: &str, indent: usize) -> std::result::Result<String, ParseError> {
    let statement = parse(sql)?;
    Ok(pretty::format_statement(&statement, indent))
}

/// Lists the tokens of `sql`, one per line: offset, kind, lexeme.
///
/// The lexeme is the source text as written, with control characters
/// escaped so a token never spans lines.
///
/// # Errors
///
/// Returns the lexical error if `sql` cannot be tokenized.
pub fn tokens(sql: &str) -> std::result::Result<String, LexError> {
    let lines: Vec<String> = Lexer::new(sql)
        .tokenize()?
        .iter()
        .filter(|token| !token.is_eof())
        .map(|token| {
            let lexeme = printable(token.span.slice(sql));
            format!("{}\t{}\t{lexeme}", token.offset(), token.kind)
        })
        .collect();
    Ok(lines.join("\n"))
}

fn printable(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Lists the reserved words, one per line.
#[must_use]
pub fn keywords() -> String {
    Keyword::ALL
        .iter()
        .map(Keyword::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
