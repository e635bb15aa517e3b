//! Parser error types.

use crate::lexer::{LexError, Span, TokenKind};

/// A parse error.
///
/// Parsing stops at the first error; there is no recovery and no partial
/// AST.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lexical(#[from] LexError),

    /// The token stream does not match the grammar.
    #[error("{message} at position {}", span.start)]
    Syntax {
        /// The error message.
        message: String,
        /// The actual token found.
        found: TokenKind,
        /// The location of the offending token.
        span: Span,
    },
}

impl ParseError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(message: impl Into<String>, found: TokenKind, span: Span) -> Self {
        Self::Syntax {
            message: message.into(),
            found,
            span,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: &str, found: TokenKind, span: Span) -> Self {
        Self::new(
            format!("Unexpected token: expected {expected}, found {found}"),
            found,
            span,
        )
    }

    /// Returns the message without the position suffix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Lexical(err) => err.to_string(),
            Self::Syntax { message, .. } => message.clone(),
        }
    }

    /// Byte offset at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lexical(err) => err.offset(),
            Self::Syntax { span, .. } => span.start,
        }
    }

    /// The offending token kind, or `None` for lexical errors.
    #[must_use]
    pub const fn found(&self) -> Option<TokenKind> {
        match self {
            Self::Lexical(_) => None,
            Self::Syntax { found, .. } => Some(*found),
        }
    }
}
