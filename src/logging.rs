//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays reserved for the usage and success lines.
//! Verbosity is controlled by `DICTCONV_LOG` using `EnvFilter` directives.

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;
use crate::config::LOG_ENV_VAR;

/// Filter used when `DICTCONV_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
