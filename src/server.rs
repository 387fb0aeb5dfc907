//! HTTP surface: axum routes over the import, export, and console handlers
//!
//! POST bodies arrive as form fields whose values are JSON-encoded, matching
//! the admin UI's submission format; every response body is JSON.

use crate::error::AdminError;
use crate::handlers::console::{self, ConsoleFormInfo, ConsoleOutcome, CONSOLE_ENDPOINT};
use crate::handlers::export::{ExportFormInfo, ExportHandler, ExportPage, EXPORT_ENDPOINT};
use crate::handlers::import::{self, ImportFormInfo, ImportOutcome, IMPORT_ENDPOINT};
use crate::storage::CharacterDatabase;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Single database connection, locked per request.
    /// Wrapped in Arc<Mutex> since rusqlite's Connection is not Sync.
    pub db: Arc<Mutex<CharacterDatabase>>,

    /// Export handler owning the cached projection.
    pub export: Arc<ExportHandler>,
}

impl AppState {
    pub fn new(db: CharacterDatabase) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            export: Arc::new(ExportHandler::new()),
        }
    }
}

/// Build the admin router. GET returns form metadata, POST runs the
/// operation.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(IMPORT_ENDPOINT, get(import_form).post(import_rows))
        .route(EXPORT_ENDPOINT, get(export_form).post(export_page))
        .route(CONSOLE_ENDPOINT, get(console_form).post(console_query))
        .with_state(state)
}

// ============================================================================
// Request Types
// ============================================================================

/// Import form fields; each value is a JSON document in a string.
#[derive(Debug, Deserialize)]
struct ImportForm {
    file_name: String,
    rows: String,
    csv_headers: String,
}

#[derive(Debug, Deserialize)]
struct ExportForm {
    offset: String,
    limit: String,
}

#[derive(Debug, Deserialize)]
struct ConsoleForm {
    query: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn import_form() -> Json<ImportFormInfo> {
    Json(import::form_info())
}

async fn import_rows(
    State(state): State<AppState>,
    Form(form): Form<ImportForm>,
) -> Result<Json<ImportOutcome>, AdminError> {
    let file_name: String = serde_json::from_str(&form.file_name)?;
    let headers: Vec<String> = serde_json::from_str(&form.csv_headers)?;
    let rows: Vec<Vec<Option<String>>> = serde_json::from_str(&form.rows)?;

    let outcome = {
        let mut db = state.db.lock().unwrap();
        import::import_characters(&mut db, &file_name, &headers, &rows)?
    };

    // The export projection is stale the moment new rows land
    state.export.invalidate();
    info!(file = %file_name, entries = outcome.entries, "characters imported");

    Ok(Json(outcome))
}

async fn export_form(State(state): State<AppState>) -> Result<Json<ExportFormInfo>, AdminError> {
    let db = state.db.lock().unwrap();
    Ok(Json(state.export.form_info(&db)?))
}

async fn export_page(
    State(state): State<AppState>,
    Form(form): Form<ExportForm>,
) -> Result<Json<ExportPage>, AdminError> {
    let offset: usize = serde_json::from_str(&form.offset)?;
    let limit: usize = serde_json::from_str(&form.limit)?;

    let db = state.db.lock().unwrap();
    Ok(Json(state.export.page(&db, offset, limit)?))
}

async fn console_form() -> Json<ConsoleFormInfo> {
    Json(console::form_info())
}

async fn console_query(
    State(state): State<AppState>,
    Form(form): Form<ConsoleForm>,
) -> Result<Json<ConsoleOutcome>, AdminError> {
    let query: String = serde_json::from_str(&form.query)?;

    let db = state.db.lock().unwrap();
    // Always 200: console failures are recovered into the body
    Ok(Json(console::run_query(&db, &query)))
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match &self {
            AdminError::HeaderNotFound { .. }
            | AdminError::MalformedRow { .. }
            | AdminError::InvalidNumber { .. }
            | AdminError::RejectedStatement
            | AdminError::SqlParse(_)
            | AdminError::Json(_) => StatusCode::BAD_REQUEST,
            AdminError::Io(_) | AdminError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
