//! Shell completions generation.
//!
//! `toolgate --completions <SHELL>` writes a completion script to stdout.

use std::io::Write;

use crate::cli::args::Cli;
use crate::ui::UserInterface;
use clap::CommandFactory;
use clap_complete::Shell;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }

    /// Render the completion script into `buf`.
    pub fn render(&self, buf: &mut dyn Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "toolgate", buf);
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut buf = Vec::new();
        self.render(&mut buf);
        ui.data(String::from_utf8_lossy(&buf).trim_end());
        Ok(CommandResult::success())
    }
}
