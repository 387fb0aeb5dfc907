//! Ad-hoc SQL console restricted to SELECT statements

use crate::error::{AdminError, Result};
use crate::storage::CharacterDatabase;
use serde::Serialize;
use serde_json::Value;
use sqlparser::ast::Statement;
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;
use tracing::warn;

pub const CONSOLE_ENDPOINT: &str = "/admin/live-editor/";

/// Console response body. Errors are carried here, not as HTTP failures.
#[derive(Debug, PartialEq, Serialize)]
pub struct ConsoleOutcome {
    pub columns: Vec<String>,
    pub rows: Option<Vec<Vec<Value>>>,
    pub error: Option<String>,
}

impl ConsoleOutcome {
    fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: None,
            error: None,
        }
    }
}

/// Metadata returned for the console form.
#[derive(Debug, Serialize)]
pub struct ConsoleFormInfo {
    pub endpoint: &'static str,
}

pub fn form_info() -> ConsoleFormInfo {
    ConsoleFormInfo {
        endpoint: CONSOLE_ENDPOINT,
    }
}

/// Validate a user-submitted query as SELECT-only, execute it, and return
/// column names and rows.
///
/// Every failure - parse error, rejected statement type, execution error -
/// is recovered into the `error` field of the outcome; the caller always
/// gets a well-formed response body.
pub fn run_query(db: &CharacterDatabase, query: &str) -> ConsoleOutcome {
    if query.is_empty() {
        return ConsoleOutcome::empty();
    }

    match execute_select(db, query) {
        Ok((columns, rows)) => ConsoleOutcome {
            columns,
            rows: Some(rows),
            error: None,
        },
        Err(e) => {
            warn!(error = %e, "console query failed");
            ConsoleOutcome {
                columns: Vec::new(),
                rows: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Gate the statement types, then run the original string against the live
/// connection. `Statement::Query` covers plain SELECTs and CTE SELECTs.
fn execute_select(db: &CharacterDatabase, query: &str) -> Result<(Vec<String>, Vec<Vec<Value>>)> {
    let statements = Parser::parse_sql(&SQLiteDialect {}, query)?;
    for statement in &statements {
        if !matches!(statement, Statement::Query(_)) {
            return Err(AdminError::RejectedStatement);
        }
    }

    Ok(db.raw_select(query)?)
}
