//! Process-level context shared by the CLI entry points

pub mod environment;

pub use environment::Environment;
