//! Config resolution
//!
//! There is no configuration file: everything a run needs comes from the
//! command line, plus the `DICTCONV_LOG` environment variable for log verbosity.

use std::path::PathBuf;
use crate::cli::{Args, LogFormat};

/// Fixed output file, relative to the current working directory
pub const OUTPUT_FILE: &str = "output.xml";

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "DICTCONV_LOG";

/// dictconv configuration for a single conversion run
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    /// Resolve the run configuration from parsed arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            input_path: args.input.clone(),
            output_path: PathBuf::from(OUTPUT_FILE),
            log_format: args.log_format,
        }
    }
}
