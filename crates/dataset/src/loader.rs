//! CSV loading for the historical interaction log.
//!
//! The header is validated against the required column set before any row
//! is deserialized, so a malformed export fails fast with the missing
//! column's name rather than a mid-file parse error.

use offerlift_core::types::{
    Interaction, FEATURE_COLUMNS, OFFER_COLUMN, OUTCOME_COLUMN, TREATMENT_COLUMN, USER_COLUMN,
};
use offerlift_core::{LiftError, LiftResult};
use std::path::Path;
use tracing::info;

/// All columns a usable interaction log must carry.
pub fn required_columns() -> Vec<&'static str> {
    let mut columns = vec![USER_COLUMN, OFFER_COLUMN, TREATMENT_COLUMN, OUTCOME_COLUMN];
    columns.extend(FEATURE_COLUMNS);
    columns
}

/// Load an interaction log from a CSV file with headers.
pub fn load_interactions(path: impl AsRef<Path>) -> LiftResult<Vec<Interaction>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(LiftError::MissingColumn(column.to_string()));
        }
    }

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<Interaction>().enumerate() {
        let row = result?;
        if row.treatment > 1 {
            return Err(LiftError::Dataset(format!(
                "row {}: treatment must be 0 or 1, got {}",
                index + 1,
                row.treatment
            )));
        }
        if row.outcome_click > 1 {
            return Err(LiftError::Dataset(format!(
                "row {}: outcome_click must be 0 or 1, got {}",
                index + 1,
                row.outcome_click
            )));
        }
        rows.push(row);
    }

    info!(path = %path.display(), rows = rows.len(), "Loaded interaction log");
    Ok(rows)
}

/// Write an interaction log as CSV with headers.
pub fn write_interactions(path: impl AsRef<Path>, rows: &[Interaction]) -> LiftResult<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = rows.len(), "Wrote interaction log");
    Ok(())
}
