//! Bulk CSV import of character records

use crate::error::{AdminError, Result};
use crate::mapper::{normalize, ColumnMap};
use crate::storage::{CharacterDatabase, NewCharacter};
use serde::Serialize;

/// The eight headers every import request must declare, in the order shown
/// to the user on the upload form. Rows may order their columns differently;
/// lookup is by name.
pub const EXPECTED_HEADERS: [&str; 8] = [
    "NAME",
    "HEIGHT",
    "MASS",
    "HAIR COLOR",
    "EYE COLOR",
    "SKIN COLOR",
    "BIRTH YEAR",
    "GENDER",
];

pub const IMPORT_ENDPOINT: &str = "/admin/starwars/characters/import/";

/// Per-row status entry in the import response.
#[derive(Debug, Clone, Serialize)]
pub struct RowStatus {
    pub character: Option<String>,
    pub status: &'static str,
    pub msg: &'static str,
}

/// Result of one import request.
#[derive(Debug, Serialize)]
pub struct ImportOutcome {
    pub file: String,
    pub entries: usize,
    pub results: Vec<RowStatus>,
}

/// Static metadata returned for the upload form.
#[derive(Debug, Serialize)]
pub struct ImportFormInfo {
    pub form_title: &'static str,
    pub description: &'static str,
    pub headers: [&'static str; 8],
    pub endpoint: &'static str,
}

/// Form metadata for the GET branch; touches no storage.
pub fn form_info() -> ImportFormInfo {
    ImportFormInfo {
        form_title: "Upload users csv file.",
        description: "The file should have following headers: \
                      [NAME,HEIGHT,MASS,HAIR COLOR,EYE COLOR,SKIN COLOR,BIRTH YEAR,GENDER]. \
                      The Following rows should contain information for the same.",
        headers: EXPECTED_HEADERS,
        endpoint: IMPORT_ENDPOINT,
    }
}

/// Import an uploaded row-set: map every row against the declared headers,
/// build the records, and persist them with a single bulk insert.
///
/// Fails before any write on a missing header, a row of the wrong width, or
/// a non-numeric HEIGHT/MASS cell.
pub fn import_characters(
    db: &mut CharacterDatabase,
    file_name: &str,
    headers: &[String],
    rows: &[Vec<Option<String>>],
) -> Result<ImportOutcome> {
    let map = ColumnMap::new(headers);

    // Resolve all expected columns up front so a missing header fails the
    // whole request before any row is touched.
    let name_col = map.locate("NAME")?;
    let height_col = map.locate("HEIGHT")?;
    let mass_col = map.locate("MASS")?;
    let hair_color_col = map.locate("HAIR COLOR")?;
    let eye_color_col = map.locate("EYE COLOR")?;
    let skin_color_col = map.locate("SKIN COLOR")?;
    let birth_year_col = map.locate("BIRTH YEAR")?;
    let gender_col = map.locate("GENDER")?;

    let mut new_characters = Vec::with_capacity(rows.len());
    let mut results = Vec::with_capacity(rows.len());

    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() != map.width() {
            return Err(AdminError::MalformedRow {
                row: row_idx,
                expected: map.width(),
                found: row.len(),
            });
        }

        let name = row[name_col].clone();
        let height = parse_numeric(row[height_col].as_deref(), row_idx, "HEIGHT")?;
        let mass = parse_numeric(row[mass_col].as_deref(), row_idx, "MASS")?;

        new_characters.push(NewCharacter {
            name: name.clone(),
            height,
            mass,
            hair_color: row[hair_color_col].clone(),
            skin_color: row[skin_color_col].clone(),
            eye_color: row[eye_color_col].clone(),
            birth_year: row[birth_year_col].clone(),
            gender: row[gender_col].clone(),
        });
        results.push(RowStatus {
            character: name,
            status: "FINISHED",
            msg: "Character created successfully!",
        });
    }

    db.bulk_insert_characters(&new_characters)?;

    Ok(ImportOutcome {
        file: file_name.to_string(),
        entries: results.len(),
        results,
    })
}

/// Normalize a numeric-ish cell, then parse it. Blank or null becomes
/// `None`; anything non-numeric is a typed error naming the row.
fn parse_numeric(raw: Option<&str>, row: usize, column: &'static str) -> Result<Option<f64>> {
    match normalize(raw) {
        None => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AdminError::InvalidNumber {
                row,
                column: column.to_string(),
                value,
            }),
    }
}
