//! Exit status codes for the CLI
//!
//! dictconv follows standard Unix exit code conventions:
//! - 0: Success
//! - 1: Any error (bad arguments, unreadable input, malformed CSV, unwritable output)
//!
//! Every failure is terminal, so there is no finer-grained taxonomy of codes.

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Conversion completed and the output document was written
    Success = 0,
    /// Any error, whichever step failed
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
