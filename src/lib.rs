//! dictconv library interface
//!
//! This crate converts a CSV list of terms into an Apple Dictionary XML
//! document.
//!
//! # Module Organization
//!
//! - [`dictionary`] - Loading, entry building and XML serialization
//! - [`errors`] - Error types (DictconvError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod dictionary;
pub mod errors;
pub mod logging;
pub mod status;
