//! # sqlbasic-core
//!
//! A hand-written SQL front end for a dialect-agnostic subset of SQL:
//! SELECT with joins and derived tables, INSERT, UPDATE, DELETE,
//! CREATE/DROP TABLE and INDEX, and ALTER TABLE ADD COLUMN.
//!
//! This crate provides:
//! - A lexer that hands out tokens on demand
//! - A recursive descent parser producing an immutable AST
//! - A canonical single-line dump (`Display`) and a multi-line layout
//! - A validity check that classifies a statement by its leading keyword
//!
//! ```rust
//! use sqlbasic_core::{check_sql, parse, StatementCategory};
//!
//! let stmt = parse("select id, name from users u where u.id = 1").unwrap();
//! assert_eq!(
//!     stmt.to_string(),
//!     "SELECT id, name FROM users AS u WHERE u.id = 1"
//! );
//!
//! assert_eq!(check_sql("DELETE FROM t"), Ok(StatementCategory::Delete));
//! assert!(check_sql("garbage sql tokens").is_err());
//! ```

pub mod ast;
pub mod classify;
pub mod dump;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, Statement};
pub use classify::{check_sql, StatementCategory};
pub use dump::pretty;
pub use lexer::{Keyword, LexError, Lexer, Token, TokenKind};
pub use parser::{parse, ParseError, Parser};
