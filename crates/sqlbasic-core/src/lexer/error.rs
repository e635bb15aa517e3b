//! Lexical error types.

/// A fatal error raised while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A `'` string literal reached end of input before its closing quote.
    #[error("Unterminated string starting at position {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// A character that cannot start any token.
    #[error("Unexpected character '{ch}' at position {offset}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },
}

impl LexError {
    /// Byte offset at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnterminatedString { offset } | Self::UnexpectedChar { offset, .. } => *offset,
        }
    }
}
