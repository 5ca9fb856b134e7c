//! CLI argument definitions using clap
//!
//! The converter takes exactly one positional argument, the input CSV path.
//! The output location is fixed and cannot be changed from the command line.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// dictconv - Convert a term/description/tag CSV file into Apple Dictionary XML
#[derive(Parser, Debug, Clone)]
#[command(name = "dictconv", version, about, long_about = None)]
pub struct Args {
    // =========================================================================
    // POSITIONAL ARGUMENTS
    // =========================================================================
    /// CSV file with a header row followed by `term,description[,tag]` rows
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================
    /// Output format for diagnostic logs on stderr: json (JSON Lines) or text (default)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Log format for diagnostic output
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
