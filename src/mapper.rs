//! Column mapping for uploaded CSV row-sets.
//!
//! An import request declares its own header order, so every field lookup
//! goes through [`ColumnMap::locate`] instead of assuming fixed positions.

use crate::error::{AdminError, Result};

/// Resolves named CSV headers to positional indexes for one import request.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    headers: Vec<String>,
}

impl ColumnMap {
    pub fn new(headers: &[String]) -> Self {
        Self {
            headers: headers.to_vec(),
        }
    }

    /// Number of declared columns; every row must match this width.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Position of `name` within the declared headers.
    pub fn locate(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AdminError::HeaderNotFound {
                header: name.to_string(),
            })
    }
}

/// Normalize a raw cell value: null or blank becomes `None`, anything else
/// is returned trimmed.
pub fn normalize(value: Option<&str>) -> Option<String> {
    match value {
        None => None,
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}
