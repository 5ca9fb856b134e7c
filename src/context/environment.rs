//! Execution environment

use std::path::Path;

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    /// Name shown in the usage line, derived from argv[0]
    pub program_name: String,
}

impl Environment {
    /// Build the environment from the raw argument vector
    pub fn from_args(args: &[String]) -> Self {
        let mut env = Self::default();
        if let Some(basename) = args.first().and_then(|name| Path::new(name).file_stem()) {
            env.program_name = basename.to_string_lossy().to_string();
        }
        env
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            program_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}
