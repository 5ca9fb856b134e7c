//! CSV loading
//!
//! Reads the whole input into memory before any entry is built. The header
//! row is consumed and never inspected.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::dictionary::model::RawRow;
use crate::errors::{DictconvError, Result};

/// Open and read every data row of a CSV file
pub fn load_records(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|source| DictconvError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = read_records(file)?;
    info!(path = %path.display(), rows = rows.len(), "Loaded CSV rows");
    Ok(rows)
}

/// Read every data row from a CSV source
///
/// Rows may have any number of fields; short rows are filtered later by the
/// entry builder rather than rejected here.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(RawRow::new(line, record.iter().map(str::to_string).collect()));
    }

    debug!(rows = rows.len(), "Parsed CSV data rows");
    Ok(rows)
}
