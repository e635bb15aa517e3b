//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node is a plain value; rendering back to SQL lives in
//! [`crate::dump`].

mod expression;
mod statement;

pub use expression::{BinaryOp, Expr, FunctionCall, Literal, QualifiedName, UnaryOp};
pub use statement::{
    AlterTableAddColumnStatement, Assignment, ColumnDefinition, CreateIndexStatement,
    CreateTableStatement, DeleteStatement, DropIndexStatement, DropTableStatement, FromClause,
    FromItem, InsertSource, InsertStatement, JoinClause, JoinKind, NamedTable, OrderByItem,
    OrderDirection, SelectItem, SelectStatement, Statement, UpdateStatement,
};
