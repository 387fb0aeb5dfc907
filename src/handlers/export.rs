//! Paginated export of the character projection

use crate::error::Result;
use crate::storage::{CharacterDatabase, ExportRow};
use serde::Serialize;
use std::sync::Mutex;

pub const EXPORT_ENDPOINT: &str = "/admin/starwars/characters/export/";
pub const EXPORT_FILE_NAME: &str = "starwars_characters.csv";

/// Field labels of the export projection, in column order.
pub const EXPORT_HEADERS: [&str; 5] = ["name", "height", "mass", "birth_year", "gender"];

/// One page of exported rows.
#[derive(Debug, Serialize)]
pub struct ExportPage {
    pub results: Vec<ExportRow>,
}

/// Metadata returned for the export form.
#[derive(Debug, Serialize)]
pub struct ExportFormInfo {
    pub total_count: u64,
    pub headers: [&'static str; 5],
    pub endpoint: &'static str,
    #[serde(rename = "fileName")]
    pub file_name: &'static str,
}

/// Pages through a cached projection of all characters.
///
/// The projection is materialized once on first use and reused for every
/// subsequent page, so a page never reflects records inserted after the
/// first call. The original implementation cached for the process lifetime
/// and never invalidated after imports; here the cache is explicit and the
/// HTTP layer drops it on every successful import.
#[derive(Default)]
pub struct ExportHandler {
    cache: Mutex<Option<Vec<ExportRow>>>,
}

impl ExportHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sub-range `[offset, limit)` of the cached projection.
    ///
    /// `limit` is an exclusive upper index (slice semantics), not a count.
    /// Ranges past the end clamp to an empty page.
    pub fn page(
        &self,
        db: &CharacterDatabase,
        offset: usize,
        limit: usize,
    ) -> Result<ExportPage> {
        let mut cache = self.cache.lock().unwrap();
        if cache.is_none() {
            *cache = Some(db.export_projection()?);
        }
        let rows = cache.as_ref().unwrap();

        let end = limit.min(rows.len());
        let results = if offset >= end {
            Vec::new()
        } else {
            rows[offset..end].to_vec()
        };

        Ok(ExportPage { results })
    }

    /// Drop the cached projection so the next page re-reads storage.
    pub fn invalidate(&self) {
        *self.cache.lock().unwrap() = None;
    }

    /// Form metadata for the GET branch. The count is read fresh on every
    /// call, bypassing the projection cache.
    pub fn form_info(&self, db: &CharacterDatabase) -> Result<ExportFormInfo> {
        Ok(ExportFormInfo {
            total_count: db.count_characters()?,
            headers: EXPORT_HEADERS,
            endpoint: EXPORT_ENDPOINT,
            file_name: EXPORT_FILE_NAME,
        })
    }
}
