//! External command execution.
//!
//! Commands are spawned directly, without an intermediate shell, so the
//! command line is split on whitespace and never interpreted.

use crate::error::Result;
use std::fmt;
use std::process::{Command, Stdio};
use std::time::Instant;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program to run, resolved against `PATH`.
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Create a command line from a program and arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a command string on whitespace.
    ///
    /// Returns `None` for a blank string. Quoting is not supported.
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Execute a command, capturing stdout and stderr.
///
/// Fails only when the process cannot be spawned; a non-zero exit is
/// reported through [`CommandResult::success`].
pub fn execute(command: &CommandLine) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    // `output()` waits for exit and drains both pipes before returning.
    let output = cmd.output()?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        command = %command,
        code = ?output.status.code(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "command finished"
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_whitespace() {
        let cmd = CommandLine::parse("  go   version ").unwrap();
        assert_eq!(cmd.program, "go");
        assert_eq!(cmd.args, vec!["version".to_string()]);
    }

    #[test]
    fn parse_blank_is_none() {
        assert!(CommandLine::parse("").is_none());
        assert!(CommandLine::parse("   \t").is_none());
    }

    #[test]
    fn display_joins_program_and_args() {
        let cmd = CommandLine::new("go", ["version", "-m"]);
        assert_eq!(cmd.to_string(), "go version -m");
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_command() {
        let cmd = CommandLine::new("echo", ["hello"]);
        let result = execute(&cmd).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_command() {
        let cmd = CommandLine::new("sh", ["-c", "exit 4"]);
        let result = execute(&cmd).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(4));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_command_keeps_stdout() {
        let cmd = CommandLine::new("sh", ["-c", "echo partial; exit 1"]);
        let result = execute(&cmd).unwrap();

        assert!(!result.success);
        assert_eq!(result.stdout.trim(), "partial");
    }

    #[test]
    fn execute_missing_program_is_io_error() {
        let cmd = CommandLine::new("toolgate-no-such-program-xyz", ["version"]);
        let err = execute(&cmd).unwrap_err();
        assert!(matches!(err, crate::GateError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn execute_captures_stderr() {
        let cmd = CommandLine::new("sh", ["-c", "echo oops >&2"]);
        let result = execute(&cmd).unwrap();
        assert!(result.stderr.contains("oops"));
        assert!(result.stdout.is_empty());
    }
}
