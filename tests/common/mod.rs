//! Common test utilities for dictconv integration tests
//!
//! This module provides shared test infrastructure including:
//! - A scratch working directory per test (the output path is fixed)
//! - CLI invocation helpers
//! - Output parsing helpers

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Fixed name of the generated document
pub const OUTPUT_FILE: &str = "output.xml";

/// Exit status codes matching the Rust application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit status code
    pub exit_status: ExitStatus,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }
}

/// Scratch working directory the CLI runs in
pub struct Workspace {
    dir: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Workspace root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file into the workspace and return its path
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Path of the generated document
    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join(OUTPUT_FILE)
    }

    /// Read the generated document
    pub fn output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("Failed to read output.xml")
    }

    /// Run the CLI with the given arguments inside this workspace
    pub fn run(&self, args: &[&str]) -> CliResponse {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dictconv"));
        cmd.args(args);
        cmd.current_dir(self.dir.path());
        cmd.env_remove("DICTCONV_LOG");

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().expect("Failed to execute command");
        parse_output(output)
    }
}

/// Write `csv` as `input.csv` in a fresh workspace and convert it
pub fn convert_csv(csv: &str) -> (Workspace, CliResponse) {
    let ws = Workspace::new();
    ws.write("input.csv", csv);
    let r = ws.run(&["input.csv"]);
    (ws, r)
}

fn parse_output(output: Output) -> CliResponse {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(1);

    CliResponse {
        stdout,
        stderr,
        exit_status: ExitStatus::from(exit_code),
        exit_code,
    }
}

/// Extract the value of every `id="..."` attribute, in document order
pub fn entry_ids(xml: &str) -> Vec<String> {
    xml.match_indices("<d:entry id=\"")
        .map(|(pos, prefix)| {
            let rest = &xml[pos + prefix.len()..];
            let end = rest.find('"').expect("unterminated id attribute");
            rest[..end].to_string()
        })
        .collect()
}
