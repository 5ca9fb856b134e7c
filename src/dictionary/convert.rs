//! End-to-end conversion

use std::path::Path;
use tracing::info;

use crate::dictionary::builder::build_entries;
use crate::dictionary::loader::load_records;
use crate::dictionary::model::Dictionary;
use crate::dictionary::writer::write_dictionary;
use crate::errors::Result;

/// Counts reported after a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Data rows read, excluding the header
    pub rows_read: usize,
    /// Entries written to the document
    pub entries_written: usize,
}

impl ConversionSummary {
    /// Rows dropped for having fewer than two fields
    pub fn rows_skipped(&self) -> usize {
        self.rows_read - self.entries_written
    }
}

/// Convert the CSV file at `input` into an XML document at `output`
///
/// Aborts on the first error. Nothing is written unless loading and rendering
/// both succeed.
pub fn convert(input: &Path, output: &Path) -> Result<ConversionSummary> {
    let rows = load_records(input)?;
    let dictionary = Dictionary::new(build_entries(&rows));
    write_dictionary(&dictionary, output)?;

    let summary = ConversionSummary {
        rows_read: rows.len(),
        entries_written: dictionary.len(),
    };
    info!(
        rows = summary.rows_read,
        entries = summary.entries_written,
        skipped = summary.rows_skipped(),
        "Conversion finished"
    );
    Ok(summary)
}
