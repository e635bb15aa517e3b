//! SQL Lexer/Tokenizer
//!
//! A hand-written lexer that hands out tokens one at a time. Whitespace,
//! `--` line comments and `/* */` block comments are skipped.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
