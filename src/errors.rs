//! Error types for dictconv

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dictconv
///
/// Variants are split by the pipeline step that failed. None of them is
/// recoverable: the CLI reports the error and exits with status 1.
#[derive(Error, Debug)]
pub enum DictconvError {
    #[error("Error opening file {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Error creating output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error encoding XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, DictconvError>;
