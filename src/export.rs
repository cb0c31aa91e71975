//! CSV export of raw series points.
//!
//! Export is a pure formatting layer over [`SeriesStore::points`]: one
//! `timestamp,value` row per point in insertion order, under a `ts,value`
//! header. It carries no aggregation logic.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::store::SeriesStore;

/// Errors that can occur while exporting a series as CSV.
#[derive(Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    Csv(csv::Error),
    /// The underlying writer failed.
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Csv(e) => write!(f, "CSV error: {e}"),
            ExportError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Csv(e) => Some(e),
            ExportError::Io(e) => Some(e),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err)
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        ExportError::Io(err)
    }
}

/// Writes the named series to `writer` as CSV.
///
/// Emits a `ts,value` header followed by one row per point, in the order the
/// store yields them (insertion order). An unknown series produces only the
/// header.
///
/// # Errors
///
/// Returns [`ExportError`] if serialization or the underlying writer fails.
pub fn write_series_csv<W: io::Write>(
    store: &SeriesStore,
    name: &str,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["ts", "value"])?;
    for point in store.points(name) {
        csv_writer.write_record([point.timestamp_ms.to_string(), point.value.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the named series to a file at `path` as CSV.
///
/// Convenience wrapper around [`write_series_csv`]; the file is created or
/// truncated.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be created or the write fails.
pub fn export_series_csv<P: AsRef<Path>>(
    store: &SeriesStore,
    name: &str,
    path: P,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_series_csv(store, name, file)
}
