//! Statement validity check and leading-keyword classification.

use core::fmt;

use crate::lexer::{Keyword, Lexer, TokenKind};
use crate::parser::{parse, ParseError};

/// What kind of statement a valid input starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementCategory {
    /// SELECT.
    Select,
    /// INSERT.
    Insert,
    /// UPDATE.
    Update,
    /// DELETE.
    Delete,
    /// CREATE TABLE or CREATE INDEX.
    Create,
    /// DROP TABLE or DROP INDEX.
    Drop,
    /// Valid, but not one of the above (ALTER TABLE).
    Unclassified,
}

impl StatementCategory {
    /// Maps the kind of a statement's first token to its category.
    #[must_use]
    pub const fn from_leading(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Keyword(Keyword::Select) => Self::Select,
            TokenKind::Keyword(Keyword::Insert) => Self::Insert,
            TokenKind::Keyword(Keyword::Update) => Self::Update,
            TokenKind::Keyword(Keyword::Delete) => Self::Delete,
            TokenKind::Keyword(Keyword::Create) => Self::Create,
            TokenKind::Keyword(Keyword::Drop) => Self::Drop,
            _ => Self::Unclassified,
        }
    }

    /// Returns the lower-case name used in reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Create => "create",
            Self::Drop => "drop",
            Self::Unclassified => "unclassified",
        }
    }

    /// Returns true for read-only queries.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Select)
    }

    /// Returns true for statements that change table rows.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Insert | Self::Update | Self::Delete)
    }

    /// Returns true for CREATE and DROP.
    #[must_use]
    pub const fn changes_schema(&self) -> bool {
        matches!(self, Self::Create | Self::Drop)
    }
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `sql` in full and, when it is valid, classifies it by the very
/// first token of the input.
///
/// # Errors
///
/// Returns the parse error when `sql` is not exactly one valid statement.
pub fn check_sql(sql: &str) -> Result<StatementCategory, ParseError> {
    let result = parse(sql).and_then(|_| {
        let first = Lexer::new(sql).next_token()?;
        Ok(StatementCategory::from_leading(first.kind))
    });

    match &result {
        Ok(category) => tracing::debug!(%category, "statement is valid"),
        Err(err) => tracing::debug!(error = %err, "statement is invalid"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(check_sql("SELECT * FROM t"), Ok(StatementCategory::Select));
        assert_eq!(
            check_sql("DELETE FROM t WHERE id = 1"),
            Ok(StatementCategory::Delete)
        );
        assert_eq!(
            check_sql("insert into t values (1)"),
            Ok(StatementCategory::Insert)
        );
        assert_eq!(
            check_sql("UPDATE t SET a = 1"),
            Ok(StatementCategory::Update)
        );
        assert_eq!(
            check_sql("CREATE INDEX i ON t (a)"),
            Ok(StatementCategory::Create)
        );
        assert_eq!(check_sql("DROP TABLE t;"), Ok(StatementCategory::Drop));
    }

    #[test]
    fn test_alter_is_unclassified() {
        assert_eq!(
            check_sql("ALTER TABLE t ADD COLUMN c INTEGER"),
            Ok(StatementCategory::Unclassified)
        );
    }

    #[test]
    fn test_leading_comment_is_skipped() {
        assert_eq!(
            check_sql("-- report\n/* v2 */ SELECT 1"),
            Ok(StatementCategory::Select)
        );
    }

    #[test]
    fn test_invalid_input() {
        let err = check_sql("garbage sql tokens").unwrap_err();
        assert_eq!(err.offset(), 0);
        assert!(err.to_string().contains("at position 0"));
    }

    #[test]
    fn test_helpers() {
        assert!(StatementCategory::Select.is_query());
        assert!(StatementCategory::Update.is_mutation());
        assert!(!StatementCategory::Select.is_mutation());
        assert!(StatementCategory::Drop.changes_schema());
        assert!(!StatementCategory::Unclassified.changes_schema());
        assert_eq!(StatementCategory::Unclassified.to_string(), "unclassified");
    }
}
