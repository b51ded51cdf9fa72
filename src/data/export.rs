//! Export the filtered rows for use in spreadsheets or scripts.
//!
//! Only the source columns are written; `cost` keeps its original text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::ExportError;
use super::model::ProgramRecord;

/// Write rows as CSV with a header line.
pub fn to_csv_writer<W: Write>(records: &[ProgramRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Header is written explicitly so an empty export still carries it.
    csv_writer.write_record(super::loader::REQUIRED_COLUMNS)?;
    for rec in records {
        csv_writer.serialize(rec)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Rows are serialised in memory first, so every file-system failure
/// carries the target path.
pub fn write_csv(path: &Path, records: &[ProgramRecord]) -> Result<(), ExportError> {
    let mut bytes = Vec::new();
    to_csv_writer(records, &mut bytes)?;
    std::fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write rows as a pretty-printed JSON array of objects.
pub fn write_json(path: &Path, records: &[ProgramRecord]) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn create(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
