//! Database query operations: bulk insert, export projection, raw SQL

use super::{models::*, schema::CharacterDatabase};
use anyhow::Result;
use rusqlite::params;
use rusqlite::types::ValueRef;
use serde_json::Value;

impl CharacterDatabase {
    /// Insert all characters in a single transaction.
    ///
    /// Either every row is written or none is; a failure on any row rolls
    /// the whole batch back. Returns the number of rows inserted.
    pub fn bulk_insert_characters(&mut self, characters: &[NewCharacter]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO characters
                 (name, height, mass, hair_color, skin_color, eye_color, birth_year, gender)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )?;

            for character in characters {
                stmt.execute(params![
                    character.name,
                    character.height,
                    character.mass,
                    character.hair_color,
                    character.skin_color,
                    character.eye_color,
                    character.birth_year,
                    character.gender,
                ])?;
            }
        }
        tx.commit()?;
        Ok(characters.len())
    }

    /// Read the export projection over all characters.
    ///
    /// No ORDER BY: rows come back in the engine's default order, matching
    /// the unspecified ordering of the original export.
    pub fn export_projection(&self) -> Result<Vec<ExportRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, height, mass, birth_year, gender FROM characters")?;

        let rows = stmt.query_map([], |row| {
            Ok(ExportRow {
                name: row.get(0)?,
                height: row.get(1)?,
                mass: row.get(2)?,
                birth_year: row.get(3)?,
                gender: row.get(4)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Count all character records (always fresh, never cached)
    pub fn count_characters(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM characters", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Execute one raw SQL statement and fetch every row.
    ///
    /// Returns the result-set column names in result order plus all rows
    /// with cells converted to JSON values. Statement-type gating happens
    /// in the console handler, not here.
    pub fn raw_select(&self, sql: &str) -> Result<(Vec<String>, Vec<Vec<Value>>)> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let column_count = columns.len();

        let mut results = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(column_count);
            for i in 0..column_count {
                cells.push(value_ref_to_json(row.get_ref(i)?));
            }
            results.push(cells);
        }

        Ok((columns, results))
    }
}

/// Convert a SQLite cell into a JSON value for the console response.
fn value_ref_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::String(String::from_utf8_lossy(b).into_owned()),
    }
}
