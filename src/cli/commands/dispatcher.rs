//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed CLI

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Expected gate outcomes (too old, missing argument) are reported
    /// through the returned [`CommandResult`]; anything else is an `Err`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches the parsed CLI to a command implementation.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return super::completions::CompletionsCommand::new(shell).execute(ui);
        }
        super::check::CheckCommand::new(cli.check.clone()).execute(ui)
    }

    /// Dispatch, report any error through `ui`, and return the exit code.
    pub fn run(&self, cli: &Cli, ui: &mut dyn UserInterface) -> u8 {
        match self.dispatch(cli, ui) {
            Ok(result) => result.exit_code,
            Err(e) => {
                // The error icon already marks the line; no "Error:" prefix.
                ui.error(&e.to_string());
                e.exit_code()
            }
        }
    }
}
