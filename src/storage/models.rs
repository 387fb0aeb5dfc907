//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// A character row as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: Option<String>,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

/// A character built from one import row, not yet persisted.
///
/// The surrogate id is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: Option<String>,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

/// The export projection over a character: only the fields the export
/// endpoint pages through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub name: Option<String>,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}
