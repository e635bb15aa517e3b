//! Where the SQL text comes from.

use std::io::Read;
use std::path::Path;

use crate::error::{CliError, Result};

/// Resolves the statement text: `--sql` wins, then a file, then `stdin`.
///
/// # Errors
///
/// Returns an error if the file or `stdin` cannot be read.
pub fn read_sql<R: Read>(sql: Option<String>, file: Option<&Path>, stdin: R) -> Result<String> {
    if let Some(sql) = sql {
        return Ok(sql);
    }

    if let Some(path) = file {
        tracing::debug!(path = %path.display(), "reading SQL from file");
        return std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!("reading SQL from standard input");
    std::io::read_to_string(stdin).map_err(CliError::Stdin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_sql_wins() {
        let sql = read_sql(
            Some(String::from("SELECT 1")),
            Some(Path::new("/does/not/exist.sql")),
            "SELECT 2".as_bytes(),
        )
        .unwrap();
        assert_eq!(sql, "SELECT 1");
    }

    #[test]
    fn test_stdin_fallback() {
        let sql = read_sql(None, None, "SELECT 2\n".as_bytes()).unwrap();
        assert_eq!(sql, "SELECT 2\n");
    }

    #[test]
    fn test_missing_file() {
        let err = read_sql(None, Some(Path::new("/does/not/exist.sql")), &[][..]).unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
        assert!(err.to_string().starts_with("Failed to read '/does/not/exist.sql'"));
    }
}
