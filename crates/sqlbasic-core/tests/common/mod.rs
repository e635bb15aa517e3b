#![allow(dead_code)]

use sqlbasic_core::ast::{
    DeleteStatement, InsertStatement, SelectStatement, Statement, UpdateStatement,
};
use sqlbasic_core::ParseError;

pub fn parse(sql: &str) -> Statement {
    sqlbasic_core::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    sqlbasic_core::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

/// Parses `sql`, checks that its dump equals `expected`, and that the
/// dump is a fixed point: it parses back to the same tree and renders
/// identically.
pub fn round_trip(sql: &str, expected: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    assert_eq!(rendered1, expected, "Unexpected dump for: {sql}");

    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(ast1, ast2, "Dump does not parse back to the same tree: {rendered1}");
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}

/// Like [`round_trip`] for input that is already canonical.
pub fn canonical(sql: &str) {
    round_trip(sql, sql);
}
