use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::ExportError;
use crate::results::{ResultRow, ResultSheet};

/// Default server-side file name for the result sheet.
pub const DEFAULT_CSV_NAME: &str = "lemann_index_results.csv";

/// Serialize the sheet as CSV bytes (header row first), ready for a
/// client-side download. An empty sheet serializes to empty bytes.
pub fn to_csv_bytes(sheet: &ResultSheet) -> Result<Vec<u8>, ExportError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    for row in sheet.rows() {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(bytes)
}

/// Write the sheet to `path` server-side, replacing any previous file.
pub fn save_csv(sheet: &ResultSheet, path: &Path) -> Result<(), ExportError> {
    let bytes = to_csv_bytes(sheet)?;
    fs::write(path, bytes)?;
    info!(path = %path.display(), rows = sheet.len(), "results CSV written");
    Ok(())
}

/// Read a previously written result sheet back from `path`.
pub fn read_csv(path: &Path) -> Result<Vec<ResultRow>, ExportError> {
    let mut reader = ::csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<ResultRow>() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Delete a previously written CSV. Returns whether a file was removed; a
/// missing file is not an error.
pub fn delete_csv(path: &Path) -> Result<bool, ExportError> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)?;
    info!(path = %path.display(), "results CSV deleted");
    Ok(true)
}
