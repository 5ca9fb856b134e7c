//! Run configuration

pub mod config;

pub use config::{Config, LOG_ENV_VAR, OUTPUT_FILE};
