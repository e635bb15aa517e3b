//! SQL statement AST types.

use super::expression::{Expr, QualifiedName};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByItem {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction (ASC or DESC).
    pub direction: OrderDirection,
}

impl OrderByItem {
    /// Returns true for `DESC`.
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        matches!(self.direction, OrderDirection::Desc)
    }
}

/// Join kind. A bare `JOIN` is [`JoinKind::Inner`]; `OUTER` is accepted
/// and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// INNER JOIN.
    Inner,
    /// LEFT OUTER JOIN.
    Left,
    /// RIGHT OUTER JOIN.
    Right,
    /// FULL OUTER JOIN.
    Full,
}

impl JoinKind {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
        }
    }
}

/// A table name with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTable {
    /// Table name.
    pub name: QualifiedName,
    /// Alias.
    pub alias: Option<String>,
}

impl NamedTable {
    /// Creates a table reference from a possibly dotted name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: QualifiedName::new(name.split('.')),
            alias: None,
        }
    }

    /// Adds an alias to this table reference.
    #[must_use]
    pub fn alias(self, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..self
        }
    }
}

/// An item in a FROM clause or on the right of a JOIN.
#[derive(Debug, Clone, PartialEq)]
pub enum FromItem {
    /// A plain table.
    Named(NamedTable),
    /// A parenthesized SELECT.
    Derived {
        /// The subquery.
        subquery: Box<SelectStatement>,
        /// Alias (required for subqueries).
        alias: String,
    },
}

impl FromItem {
    /// Returns the alias, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Named(table) => table.alias.as_deref(),
            Self::Derived { alias, .. } => Some(alias),
        }
    }
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// The type of join.
    pub kind: JoinKind,
    /// The item being joined.
    pub right: FromItem,
    /// The join condition.
    pub on: Expr,
}

/// A FROM clause: the first item and every join after it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    /// The first item.
    pub base: FromItem,
    /// Joins in source order.
    pub joins: Vec<JoinClause>,
}

/// A column in SELECT clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    /// The expression.
    pub expr: Expr,
    /// Column alias.
    pub alias: Option<String>,
}

impl SelectItem {
    /// Creates a new select item.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr, alias: None }
    }

    /// Creates a select item with an alias.
    #[must_use]
    pub fn with_alias(expr: Expr, alias: impl Into<String>) -> Self {
        Self {
            expr,
            alias: Some(alias.into()),
        }
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectStatement {
    /// Whether to select DISTINCT values.
    pub distinct: bool,
    /// The columns to select.
    pub columns: Vec<SelectItem>,
    /// The FROM clause.
    pub from: Option<FromClause>,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
    /// GROUP BY expressions.
    pub group_by: Vec<Expr>,
    /// HAVING clause.
    pub having: Option<Expr>,
    /// ORDER BY clauses.
    pub order_by: Vec<OrderByItem>,
    /// LIMIT count. `LIMIT a, b` stores `b` here.
    pub limit: Option<u64>,
    /// OFFSET count. `LIMIT a, b` stores `a` here.
    pub offset: Option<u64>,
}

/// Source of data for INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// VALUES (...), (...), ...
    Values(Vec<Vec<Expr>>),
    /// SELECT ...
    Query(Box<SelectStatement>),
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    /// Target table.
    pub table: NamedTable,
    /// Column names (optional).
    pub columns: Vec<String>,
    /// Values to insert.
    pub source: InsertSource,
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Column being assigned.
    pub target: QualifiedName,
    /// Value expression.
    pub value: Expr,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    /// Target table.
    pub table: NamedTable,
    /// SET assignments.
    pub assignments: Vec<Assignment>,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    /// Target table.
    pub table: NamedTable,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
}

/// A column in CREATE TABLE or ALTER TABLE ADD COLUMN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// Type and constraints as written, e.g. `DECIMAL(10, 2)`. May be empty.
    pub data_type: String,
}

/// CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableStatement {
    /// Table name.
    pub name: QualifiedName,
    /// Column definitions; never empty when parsed.
    pub columns: Vec<ColumnDefinition>,
}

/// CREATE INDEX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndexStatement {
    /// Index name.
    pub name: QualifiedName,
    /// Indexed table.
    pub table: QualifiedName,
    /// Indexed columns.
    pub columns: Vec<String>,
}

/// DROP TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTableStatement {
    /// Table name.
    pub name: QualifiedName,
}

/// DROP INDEX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndexStatement {
    /// Index name.
    pub name: QualifiedName,
    /// Table named by a trailing `ON`.
    pub table: Option<QualifiedName>,
}

/// ALTER TABLE ... ADD COLUMN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTableAddColumnStatement {
    /// Altered table.
    pub table: QualifiedName,
    /// The new column.
    pub column: ColumnDefinition,
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
    /// CREATE TABLE statement.
    CreateTable(CreateTableStatement),
    /// CREATE INDEX statement.
    CreateIndex(CreateIndexStatement),
    /// DROP TABLE statement.
    DropTable(DropTableStatement),
    /// DROP INDEX statement.
    DropIndex(DropIndexStatement),
    /// ALTER TABLE ... ADD COLUMN statement.
    AlterTableAddColumn(AlterTableAddColumnStatement),
}
