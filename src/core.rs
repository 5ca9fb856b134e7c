use clap::Parser;
use tracing::debug;

use crate::cli::Args;
use crate::config::Config;
use crate::context::Environment;
use crate::dictionary::convert;
use crate::errors::DictconvError;
use crate::logging;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Parses arguments, sets up logging, runs the conversion and maps the
/// outcome to an exit status.
pub fn run(args: Vec<String>) -> ExitStatus {
    let env = Environment::from_args(&args);

    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.print().ok();
                return ExitStatus::Success;
            }
            e.print().ok();
            print_usage(&env);
            return ExitStatus::Error;
        }
    };

    let config = Config::from_args(&parsed);
    logging::init(config.log_format);

    match program(&config) {
        Ok(status) => status,
        Err(e) => handle_error(e),
    }
}

/// Run one conversion with a resolved configuration
pub fn program(config: &Config) -> Result<ExitStatus, DictconvError> {
    debug!(?config, "Starting conversion");

    convert(&config.input_path, &config.output_path)?;

    println!(
        "Successfully converted {} to {}",
        config.input_path.display(),
        config.output_path.display()
    );
    Ok(ExitStatus::Success)
}

fn print_usage(env: &Environment) {
    println!("Usage: {} <input.csv>", env.program_name);
}

fn handle_error(error: DictconvError) -> ExitStatus {
    debug!(error = ?error, "Conversion failed");
    eprintln!("Error: {}", error);

    // All errors return the same exit code (1) following Unix conventions
    ExitStatus::Error
}
