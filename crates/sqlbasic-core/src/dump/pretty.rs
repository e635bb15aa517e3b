//! Multi-line SQL layout.
//!
//! ```text
//! SELECT
//!   a.item AS t
//! FROM
//!   aaa AS a
//!   LEFT JOIN (
//!     SELECT
//!       b.id
//!       , b.name
//!     FROM
//!       bbb AS b
//!   ) AS b ON a.id = b.id
//! WHERE
//!   a.id = 3
//! ```
//!
//! WHERE and HAVING bodies that chain conditions with AND put each
//! condition on its own line, led by `AND `.
//!
//! Only SELECT (on its own or feeding an INSERT) is laid out; every other
//! statement is printed as its canonical one-line form.

use core::fmt::Display;

use crate::ast::{BinaryOp, Expr, FromItem, InsertSource, SelectStatement, Statement};

use super::{Operand, Separated};

/// Lays `statement` out over several lines, indenting clause bodies by
/// `indent` spaces per level. The result has no trailing newline and
/// parses back to the same tree.
#[must_use]
pub fn format_statement(statement: &Statement, indent: usize) -> String {
    let mut layout = Layout::new(indent);

    match statement {
        Statement::Select(select) => layout.select(select, 0),
        Statement::Insert(insert) => match &insert.source {
            InsertSource::Query(query) => {
                let mut head = format!("INSERT INTO {}", insert.table);
                if !insert.columns.is_empty() {
                    head.push_str(&format!(" ({})", Separated(&insert.columns, ", ")));
                }
                layout.line(0, &head);
                layout.select(query, 0);
            }
            InsertSource::Values(_) => layout.line(0, &statement.to_string()),
        },
        _ => layout.line(0, &statement.to_string()),
    }

    layout.finish()
}

struct Layout {
    out: String,
    indent: usize,
}

impl Layout {
    const fn new(indent: usize) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.out.push_str(&" ".repeat(depth * self.indent));
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// One body line per item, every item after the first led by `, `.
    fn list<T: Display>(&mut self, depth: usize, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            if i == 0 {
                self.line(depth, &item.to_string());
            } else {
                self.line(depth, &format!(", {item}"));
            }
        }
    }

    fn select(&mut self, select: &SelectStatement, depth: usize) {
        let body = depth + 1;

        self.line(depth, if select.distinct { "SELECT DISTINCT" } else { "SELECT" });
        self.list(body, &select.columns);

        if let Some(from) = &select.from {
            self.line(depth, "FROM");
            self.from_item(body, &from.base, "", "");
            for join in &from.joins {
                self.from_item(
                    body,
                    &join.right,
                    &format!("{} ", join.kind),
                    &format!(" ON {}", join.on),
                );
            }
        }
        if let Some(where_clause) = &select.where_clause {
            self.line(depth, "WHERE");
            self.predicate(body, where_clause);
        }
        if !select.group_by.is_empty() {
            self.line(depth, "GROUP BY");
            self.list(body, &select.group_by);
        }
        if let Some(having) = &select.having {
            self.line(depth, "HAVING");
            self.predicate(body, having);
        }
        if !select.order_by.is_empty() {
            self.line(depth, "ORDER BY");
            self.list(body, &select.order_by);
        }
        match (select.limit, select.offset) {
            (Some(limit), Some(offset)) => {
                self.line(depth, &format!("LIMIT {limit} OFFSET {offset}"));
            }
            (Some(limit), None) => self.line(depth, &format!("LIMIT {limit}")),
            (None, Some(offset)) => self.line(depth, &format!("OFFSET {offset}")),
            (None, None) => {}
        }
    }

    /// A WHERE or HAVING body, broken before each top-level `AND`.
    fn predicate(&mut self, depth: usize, expr: &Expr) {
        let parts = conjuncts(expr);
        if parts.len() == 1 {
            self.line(depth, &expr.to_string());
            return;
        }
        // Conjuncts bind tighter than AND, so OR children keep their parentheses.
        let min = BinaryOp::And.precedence() + 1;
        for (i, part) in parts.into_iter().enumerate() {
            if i == 0 {
                self.line(depth, &Operand(part, min).to_string());
            } else {
                self.line(depth, &format!("AND {}", Operand(part, min)));
            }
        }
    }

    /// A FROM or JOIN item; derived tables open a nested block.
    fn from_item(&mut self, depth: usize, item: &FromItem, prefix: &str, suffix: &str) {
        match item {
            FromItem::Named(table) => self.line(depth, &format!("{prefix}{table}{suffix}")),
            FromItem::Derived { subquery, alias } => {
                self.line(depth, &format!("{prefix}("));
                self.select(subquery, depth + 1);
                self.line(depth, &format!(") AS {alias}{suffix}"));
            }
        }
    }

    fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

/// Splits the left spine of an AND chain, the shape the parser builds for
/// `a AND b AND c`. A right-nested AND stays one conjunct.
fn conjuncts(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Binary {
            left,
            op: BinaryOp::And,
            right,
        } => {
            let mut parts = conjuncts(left);
            parts.push(right);
            parts
        }
        _ => vec![expr],
    }
}
