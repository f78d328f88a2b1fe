//! Report emission.
//!
//! Supports pretty-printing, JSON log dumps, and CSV export of the
//! report tables.

use anyhow::Result;
use tracing::{debug, info};

use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

/// Logs a report table using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(rows: &T) {
    debug!("{:#?}", rows);
}

/// Logs a report table as pretty-printed JSON.
pub fn print_json<T: Serialize>(rows: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

/// Writes a report table as a CSV file with a header row.
///
/// Replaces any previous report at the same path and creates missing
/// parent directories.
pub fn write_records<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing report CSV");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = WriterBuilder::new().from_writer(File::create(path)?);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
