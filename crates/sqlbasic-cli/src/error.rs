//! Error types for the command-line front end.

use std::path::PathBuf;

/// Errors that stop a command before it can report on the SQL.
///
/// Invalid SQL is not one of them: commands report it as output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading an input file failed.
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading standard input failed.
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// Serializing a JSON report failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for command-line operations.
pub type Result<T> = std::result::Result<T, CliError>;
