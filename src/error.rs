//! Error types for the Star Wars characters admin service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdminError>;

/// Exact message surfaced by the SQL console when a non-SELECT statement is
/// submitted. Kept as a constant so handlers and tests agree on the wording.
pub const ONLY_SELECT_MSG: &str = "Invalid query! Only select statements are allowed";

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("column header not found: {header}")]
    HeaderNotFound { header: String },

    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: {column} value {value:?} is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid query! Only select statements are allowed")]
    RejectedStatement,

    #[error("SQL parsing failed: {0}")]
    SqlParse(#[from] sqlparser::parser::ParserError),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests;
