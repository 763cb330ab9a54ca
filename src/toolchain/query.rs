//! Querying a toolchain for its installed version.
//!
//! A toolchain reports its version on the first line of a query command,
//! e.g. `go version go1.21.5 linux/amd64`. The installed version is the
//! third whitespace-separated field of that line.

use crate::error::{GateError, Result};
use crate::shell::{execute, CommandLine};

/// Zero-based index of the version field on the first output line.
const VERSION_FIELD: usize = 2;

/// Something that can report a toolchain's raw version output.
pub trait VersionSource {
    /// Human-readable description used in error messages.
    fn describe(&self) -> String;

    /// Run the query and return its raw standard output.
    fn query(&self) -> Result<String>;
}

/// Queries a toolchain by running an external command.
#[derive(Debug, Clone)]
pub struct CommandSource {
    command: CommandLine,
}

impl CommandSource {
    /// Create a source that runs `command`.
    pub fn new(command: CommandLine) -> Self {
        Self { command }
    }

    /// Build a source from a whitespace-separated command string.
    pub fn parse(command: &str) -> Result<Self> {
        CommandLine::parse(command)
            .map(Self::new)
            .ok_or_else(|| GateError::ToolchainQueryFailed {
                command: command.to_string(),
                message: "query command is empty".to_string(),
            })
    }
}

impl VersionSource for CommandSource {
    fn describe(&self) -> String {
        self.command.to_string()
    }

    /// A non-zero exit is only an error when stdout holds no version line.
    fn query(&self) -> Result<String> {
        let result = execute(&self.command).map_err(|e| GateError::ToolchainQueryFailed {
            command: self.describe(),
            message: e.to_string(),
        })?;

        if !result.success {
            let code = result
                .exit_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            if parse_version_output(&result.stdout).is_ok() {
                tracing::warn!(
                    command = %self.command,
                    code = %code,
                    "toolchain query exited unsuccessfully; using its version output"
                );
                return Ok(result.stdout);
            }
            let stderr = result.stderr.trim();
            let message = if stderr.is_empty() {
                format!("exited with code {}", code)
            } else {
                format!("exited with code {}: {}", code, stderr)
            };
            return Err(GateError::ToolchainQueryFailed {
                command: self.describe(),
                message,
            });
        }

        Ok(result.stdout)
    }
}

/// A source that returns fixed output. Useful for tests and dry runs.
#[derive(Debug, Clone)]
pub struct StaticSource {
    output: String,
}

impl StaticSource {
    /// Create a source that always reports `output`.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl VersionSource for StaticSource {
    fn describe(&self) -> String {
        "static output".to_string()
    }

    fn query(&self) -> Result<String> {
        Ok(self.output.clone())
    }
}

/// Extract the installed-version token from raw query output.
///
/// Returns a reason string when the output is empty or the first line has
/// fewer than three fields.
pub fn parse_version_output(output: &str) -> std::result::Result<&str, String> {
    let Some(first) = output.lines().next() else {
        return Err("command produced no output".to_string());
    };

    first
        .split_whitespace()
        .nth(VERSION_FIELD)
        .ok_or_else(|| format!("unexpected version line: {:?}", first))
}

/// Query `source` and extract its installed version.
pub fn installed_version(source: &dyn VersionSource) -> Result<String> {
    let output = source.query()?;
    tracing::debug!(source = %source.describe(), output = %output.trim_end(), "toolchain output");

    parse_version_output(&output)
        .map(str::to_string)
        .map_err(|message| GateError::ToolchainQueryFailed {
            command: source.describe(),
            message,
        })
}
