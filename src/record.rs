//! Input model for the short-URL test dataset.
//!
//! The CSV is trusted as-is: every field stays raw text, including `id` and
//! `access_count`. The source file spells the fifth header `update_at` (a typo
//! carried by the upstream test data); it is looked up under that exact name
//! and emitted as the `updated_at` SQL column downstream.

use thiserror::Error;

/// Header name of the updated-at column as it appears in the source CSV.
pub const UPDATE_AT_HEADER: &str = "update_at";

/// Columns required in the input header, in the order they are emitted.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "id",
    "url",
    "short_code",
    "created_at",
    UPDATE_AT_HEADER,
    "access_count",
];

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("column '{0}' missing from header")]
    MissingColumn(String),
    #[error("row {row} has no value for column '{column}'")]
    MissingField { row: usize, column: String },
}

/// One row of the dataset, untouched apart from CSV parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: String,
    pub url: String,
    pub short_code: String,
    pub created_at: String,
    pub updated_at: String,
    pub access_count: String,
}

/// Resolved positions of the required columns within the input header.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    id: usize,
    url: usize,
    short_code: usize,
    created_at: usize,
    update_at: usize,
    access_count: usize,
}

impl ColumnMap {
    pub fn from_headers(headers: &[String]) -> Result<Self, RecordError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| RecordError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            id: find("id")?,
            url: find("url")?,
            short_code: find("short_code")?,
            created_at: find("created_at")?,
            update_at: find(UPDATE_AT_HEADER)?,
            access_count: find("access_count")?,
        })
    }

    /// Extracts a [`UrlRecord`] from a decoded row. `row` is the 1-based line
    /// number within the file (header included), used for error reporting.
    pub fn extract(&self, fields: &[String], row: usize) -> Result<UrlRecord, RecordError> {
        let get = |idx: usize, column: &str| {
            fields
                .get(idx)
                .cloned()
                .ok_or_else(|| RecordError::MissingField {
                    row,
                    column: column.to_string(),
                })
        };
        Ok(UrlRecord {
            id: get(self.id, "id")?,
            url: get(self.url, "url")?,
            short_code: get(self.short_code, "short_code")?,
            created_at: get(self.created_at, "created_at")?,
            updated_at: get(self.update_at, UPDATE_AT_HEADER)?,
            access_count: get(self.access_count, "access_count")?,
        })
    }
}
