//! Tests for the command functions behind the `sqlbasic` binary, fed
//! from inline text, files and readers.

use std::io::Write;

use sqlbasic_cli::commands;
use sqlbasic_cli::input::read_sql;
use sqlbasic_cli::CliError;
use tempfile::NamedTempFile;

fn sql_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ===================================================================
// Input
// ===================================================================

#[test]
fn reads_statement_from_file() {
    let file = sql_file("select * from users;\n");
    let sql = read_sql(None, Some(file.path()), &[][..]).unwrap();
    assert_eq!(sql, "select * from users;\n");
    assert_eq!(commands::dump(&sql).unwrap(), "SELECT * FROM users");
}

#[test]
fn inline_sql_wins_over_file() {
    let file = sql_file("DELETE FROM t");
    let sql = read_sql(Some("SELECT 1".to_string()), Some(file.path()), &[][..]).unwrap();
    assert_eq!(sql, "SELECT 1");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.sql");
    let err = read_sql(None, Some(&path), &[][..]).unwrap_err();
    assert!(matches!(err, CliError::ReadFile { .. }));
    assert!(err.to_string().contains("missing.sql"));
}

// ===================================================================
// check
// ===================================================================

#[test]
fn check_valid_statement() {
    let (output, valid) = commands::check("SELECT a FROM t", false).unwrap();
    assert!(valid);
    assert_eq!(output, "OK select");
}

#[test]
fn check_invalid_statement() {
    let (output, valid) = commands::check("garbage sql tokens", false).unwrap();
    assert!(!valid);
    assert!(output.starts_with("query is invalid: "), "{output}");
    assert!(output.ends_with("at position 0"), "{output}");
}

#[test]
fn check_json_reports() {
    let (output, valid) = commands::check("ALTER TABLE t ADD COLUMN c INTEGER", true).unwrap();
    assert!(valid);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["valid"], true);
    assert_eq!(value["category"], "unclassified");
    assert!(value["error"].is_null());

    let (output, valid) = commands::check("SELECT * FROM (SELECT 1)", true).unwrap();
    assert!(!valid);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["valid"], false);
    assert!(value["category"].is_null());
    assert!(value["error"]
        .as_str()
        .unwrap()
        .contains("Alias is required"));
    assert_eq!(value["offset"], 24);
}

// ===================================================================
// dump, format, tokens, keywords
// ===================================================================

#[test]
fn dump_and_format() {
    let sql = "select a.id, b.name from a join b on a.id = b.a_id where a.id > 1";
    assert_eq!(
        commands::dump(sql).unwrap(),
        "SELECT a.id, b.name FROM a INNER JOIN b ON a.id = b.a_id WHERE a.id > 1"
    );
    assert_eq!(
        commands::format(sql, 2).unwrap(),
        "SELECT\n  a.id\n  , b.name\nFROM\n  a\n  INNER JOIN b ON a.id = b.a_id\nWHERE\n  a.id > 1"
    );
}

#[test]
fn dump_rejects_invalid_input() {
    let err = commands::dump("SELECT 1; SELECT 2").unwrap_err();
    assert_eq!(err.offset(), 10);
    commands::format("UPDATE", 2).unwrap_err();
}

#[test]
fn tokens_listing() {
    let listing = commands::tokens("SELECT 'it''s' -- note\nFROM t").unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(
        lines,
        [
            "0\tkeyword SELECT\tSELECT",
            "7\tstring\t'it''s'",
            "23\tkeyword FROM\tFROM",
            "28\tidentifier\tt",
        ]
    );
}

#[test]
fn tokens_escape_control_characters() {
    let listing = commands::tokens("SELECT 'a\tb\nc' FROM t").unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(
        lines,
        [
            "0\tkeyword SELECT\tSELECT",
            "7\tstring\t'a\\tb\\nc'",
            "15\tkeyword FROM\tFROM",
            "20\tidentifier\tt",
        ]
    );
}

#[test]
fn tokens_reports_lexical_errors() {
    let err = commands::tokens("SELECT 'open").unwrap_err();
    assert_eq!(err.offset(), 7);
}

#[test]
fn keyword_listing() {
    let listing = commands::keywords();
    let words: Vec<&str> = listing.lines().collect();
    assert_eq!(words.len(), 43);
    assert_eq!(words.first(), Some(&"SELECT"));
    assert!(words.contains(&"COLUMN"));
}
