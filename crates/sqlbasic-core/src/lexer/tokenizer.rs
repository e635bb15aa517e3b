//! SQL Tokenizer implementation.

use super::{Keyword, LexError, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input on demand.
///
/// End of input is signalled by the character cursor returning `None`,
/// so no printable character ever doubles as a sentinel.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the source text this lexer scans.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments until a pass makes no progress.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            let before = self.pos;

            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- line comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n' && c != '\r') {
                    self.advance();
                }
            }

            // /* block comment */, runs to end of input when unterminated
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => break,
                    }
                }
            }

            if self.pos == before {
                break;
            }
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token whose text is the scanned lexeme.
    fn make_token(&self, kind: TokenKind) -> Token {
        let span = self.make_span();
        Token::new(kind, span.slice(self.input), span)
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            self.advance();
        }

        let kind = Keyword::from_str(&self.input[self.start..self.pos])
            .map_or(TokenKind::Identifier, TokenKind::Keyword);
        self.make_token(kind)
    }

    /// Scans a number: `digits['.'digits]`.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    /// Scans a `'...'` string literal, collapsing `''` into `'`.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let mut value = String::new();

        loop {
            match self.advance() {
                Some('\'') => {
                    if self.peek() == Some('\'') {
                        value.push('\'');
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(c) => value.push(c),
                None => {
                    return Err(LexError::UnterminatedString { offset: self.start });
                }
            }
        }

        Ok(Token::new(TokenKind::String, value, self.make_span()))
    }

    /// Scans the next token.
    ///
    /// Once the input is exhausted every call returns an EOF token.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` for an unterminated string literal or a
    /// character that cannot start a token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(Token::eof(self.pos));
        };

        let token = match c {
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '*' => self.make_token(TokenKind::Star),
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ';' => self.make_token(TokenKind::Semicolon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '=' => self.make_token(TokenKind::Eq),
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '\'' => self.scan_string()?,
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),
            ch => {
                tracing::trace!(%ch, offset = self.start, "unexpected character");
                return Err(LexError::UnexpectedChar {
                    ch,
                    offset: self.start,
                });
            }
        };

        Ok(token)
    }

    /// Tokenizes the entire input, including the trailing EOF token.
    ///
    /// The parser pulls tokens lazily; this is for tooling and tests.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize().unwrap()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \n\t  ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, Span::at(7));
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("a");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
        assert!(lexer.next_token().unwrap().is_eof());
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_single_line_comment() {
        assert_eq!(
            token_kinds("SELECT -- comment\nFROM"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_multi_line_comment() {
        assert_eq!(
            token_kinds("SELECT /* comment\n spanning */ FROM"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_adjacent_comments() {
        assert_eq!(
            token_kinds("/* a */-- b\n/* c */ x"),
            vec![TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(token_kinds("x /* open"), vec![TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(token_kinds("x /*"), vec![TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(token_kinds("x /* *"), vec![TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(token_kinds("x --"), vec![TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn test_space_inside_comment_is_not_end_of_input() {
        let tokens = tokenize("/* a b */ y");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "y");
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let tokens = tokenize("select FROM wHeRe");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Select));
        assert_eq!(tokens[0].text, "select");
        assert_eq!(tokens[2].kind, TokenKind::Keyword(Keyword::Where));
        assert_eq!(tokens[2].text, "wHeRe");
    }

    #[test]
    fn test_identifiers_keep_case() {
        let texts: Vec<_> = tokenize("Foo bar_baz _qux a$1 COUNT")
            .into_iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["Foo", "bar_baz", "_qux", "a$1", "COUNT"]);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("42 3.14 0");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "42");
        assert_eq!(tokens[1].text, "3.14");
        assert_eq!(tokens[2].text, "0");
    }

    #[test]
    fn test_number_dot_without_digits() {
        assert_eq!(
            token_kinds("1.x"),
            vec![
                TokenKind::Number,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_no_exponent() {
        assert_eq!(
            token_kinds("1e10"),
            vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_strings() {
        let tokens = tokenize("'hello' 'it''s' ''");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "it's");
        assert_eq!(tokens[1].span, Span::new(8, 15));
        assert_eq!(tokens[2].text, "");
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("SELECT 'abc").tokenize().unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { offset: 7 });
    }

    #[test]
    fn test_string_ending_in_escaped_quote_is_unterminated() {
        let err = Lexer::new("'abc''").tokenize().unwrap_err();
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("SELECT a ! b").tokenize().unwrap_err();
        assert_eq!(err, LexError::UnexpectedChar { ch: '!', offset: 9 });
        assert_eq!(err.to_string(), "Unexpected character '!' at position 9");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("+ - * / % = <> < <= > >="),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            token_kinds("( ) , ; ."),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_simple_select() {
        let sql = "SELECT id, name FROM users WHERE active = 1";
        assert_eq!(
            token_kinds(sql),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::Keyword(Keyword::From),
                TokenKind::Identifier,
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("SELECT id");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
        assert_eq!(tokens[2].span, Span::at(9));
    }

    #[test]
    fn test_non_ascii_identifier() {
        let tokens = tokenize("SELECT 名前 FROM t");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "名前");
        assert_eq!(tokens[1].span, Span::new(7, 13));
    }
}
