//! Rendering the AST back to SQL text.
//!
//! Every node implements [`Display`](fmt::Display) as canonical
//! single-line SQL: upper-case keywords, `AS` before every alias, explicit
//! join kinds and sort directions, and parentheses only where operator
//! precedence needs them. The output parses back to the same tree, and
//! dumping that tree again yields the same text.
//!
//! [`pretty`] lays a statement out over several indented lines instead.

pub mod pretty;

use core::fmt;

use crate::ast::{
    AlterTableAddColumnStatement, Assignment, BinaryOp, ColumnDefinition, CreateIndexStatement,
    CreateTableStatement, DeleteStatement, DropIndexStatement, DropTableStatement, Expr,
    FromClause, FromItem, FunctionCall, InsertSource, InsertStatement, JoinClause, JoinKind,
    Literal, NamedTable, OrderByItem, SelectItem, SelectStatement, Statement, UnaryOp,
    UpdateStatement,
};

/// Displays a slice with a separator between items.
pub(crate) struct Separated<'a, T>(pub &'a [T], pub &'static str);

impl<T: fmt::Display> fmt::Display for Separated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(self.1)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Displays an expression, parenthesized when it binds looser than
/// `min_precedence`.
pub(crate) struct Operand<'a>(pub &'a Expr, pub u8);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.precedence() < self.1 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Writes a string literal, doubling embedded quotes.
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("'")?;
    f.write_str(&value.replace('\'', "''"))?;
    f.write_str("'")
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => {
                // Decimals must keep their point to lex as decimals again.
                let text = value.to_string();
                if text.contains('.') || !value.is_finite() {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
            Self::String(value) => write_quoted(f, value),
        }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, Separated(&self.args, ", "))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Call(call) => write!(f, "{call}"),
            Self::AllColumns { qualifier: None } => f.write_str("*"),
            Self::AllColumns {
                qualifier: Some(qualifier),
            } => write!(f, "{qualifier}.*"),
            Self::Unary {
                op: UnaryOp::Not,
                operand,
            } => write!(f, "NOT {}", Operand(operand, UnaryOp::Not.precedence())),
            Self::Unary { op, operand } => {
                let operand = Operand(operand, op.precedence()).to_string();
                // `- -x` must not turn into a `--` comment.
                if *op == UnaryOp::Neg && operand.starts_with('-') {
                    write!(f, "- {operand}")
                } else {
                    write!(f, "{}{operand}", op.as_str())
                }
            }
            Self::Binary { left, op, right } => {
                let precedence = op.precedence();
                write!(
                    f,
                    "{} {op} {}",
                    Operand(left, precedence),
                    Operand(right, precedence + 1)
                )
            }
            Self::In {
                expr,
                list,
                negated,
            } => {
                let keyword = if *negated { "NOT IN" } else { "IN" };
                write!(
                    f,
                    "{} {keyword} ({})",
                    Operand(expr, self.precedence()),
                    Separated(list, ", ")
                )
            }
        }
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for NamedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FromItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(table) => write!(f, "{table}"),
            Self::Derived { subquery, alias } => write!(f, "({subquery}) AS {alias}"),
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JoinClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ON {}", self.kind, self.right, self.on)
    }
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        for join in &self.joins {
            write!(f, " {join}")?;
        }
        Ok(())
    }
}

impl fmt::Display for OrderByItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.expr, self.direction.as_str())
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        write!(f, "{}", Separated(&self.columns, ", "))?;
        if let Some(from) = &self.from {
            write!(f, " FROM {from}")?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, " WHERE {where_clause}")?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY {}", Separated(&self.group_by, ", "))?;
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING {having}")?;
        }
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", Separated(&self.order_by, ", "))?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        Ok(())
    }
}

/// Displays one parenthesized VALUES row.
struct Row<'a>(&'a [Expr]);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", Separated(self.0, ", "))
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INSERT INTO {}", self.table)?;
        if !self.columns.is_empty() {
            write!(f, " ({})", Separated(&self.columns, ", "))?;
        }
        match &self.source {
            InsertSource::Values(rows) => {
                let rows: Vec<Row<'_>> = rows.iter().map(|row| Row(row.as_slice())).collect();
                write!(f, " VALUES {}", Separated(&rows, ", "))
            }
            InsertSource::Query(query) => write!(f, " {query}"),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UPDATE {} SET {}",
            self.table,
            Separated(&self.assignments, ", ")
        )?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " WHERE {where_clause}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}", self.table)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " WHERE {where_clause}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.data_type.is_empty() {
            write!(f, " {}", self.data_type)?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE TABLE {} ({})",
            self.name,
            Separated(&self.columns, ", ")
        )
    }
}

impl fmt::Display for CreateIndexStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE INDEX {} ON {} ({})",
            self.name,
            self.table,
            Separated(&self.columns, ", ")
        )
    }
}

impl fmt::Display for DropTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP TABLE {}", self.name)
    }
}

impl fmt::Display for DropIndexStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP INDEX {}", self.name)?;
        if let Some(table) = &self.table {
            write!(f, " ON {table}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AlterTableAddColumnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TABLE {} ADD COLUMN {}", self.table, self.column)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => write!(f, "{s}"),
            Self::Insert(s) => write!(f, "{s}"),
            Self::Update(s) => write!(f, "{s}"),
            Self::Delete(s) => write!(f, "{s}"),
            Self::CreateTable(s) => write!(f, "{s}"),
            Self::CreateIndex(s) => write!(f, "{s}"),
            Self::DropTable(s) => write!(f, "{s}"),
            Self::DropIndex(s) => write!(f, "{s}"),
            Self::AlterTableAddColumn(s) => write!(f, "{s}"),
        }
    }
}
