//! The result of `sqlbasic check`, as text or JSON.

use serde::Serialize;
use sqlbasic_core::{ParseError, StatementCategory};

/// Outcome of validating one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Whether the input is exactly one valid statement.
    pub valid: bool,
    /// Category name for valid input.
    pub category: Option<&'static str>,
    /// Error message for invalid input.
    pub error: Option<String>,
    /// Byte offset of the error.
    pub offset: Option<usize>,
}

impl CheckReport {
    /// Builds a report from the classifier's answer.
    #[must_use]
    pub fn new(result: &Result<StatementCategory, ParseError>) -> Self {
        match result {
            Ok(category) => Self {
                valid: true,
                category: Some(category.as_str()),
                error: None,
                offset: None,
            },
            Err(err) => Self {
                valid: false,
                category: None,
                error: Some(err.to_string()),
                offset: Some(err.offset()),
            },
        }
    }

    /// Renders the one-line human-readable form.
    #[must_use]
    pub fn to_text(&self) -> String {
        match (&self.category, &self.error) {
            (Some(category), _) => format!("OK {category}"),
            (None, Some(error)) => format!("query is invalid: {error}"),
            (None, None) => String::from("query is invalid"),
        }
    }

    /// Renders the report as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
