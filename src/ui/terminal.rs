//! Terminal output.

use super::theme::{should_use_colors, GateTheme};
use super::{OutputMode, UserInterface};

/// Writes gate output to the process's standard streams.
///
/// Messages, successes, failures and data go to stdout, where build
/// pipelines read them. Warnings and errors go to stderr.
pub struct TerminalUI {
    mode: OutputMode,
    theme: GateTheme,
}

impl TerminalUI {
    /// Create a terminal UI, coloring output only on a TTY.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_colors(mode, should_use_colors())
    }

    /// Create a terminal UI with explicit color choice.
    pub fn with_colors(mode: OutputMode, colors: bool) -> Self {
        Self {
            mode,
            theme: GateTheme::for_colors(colors),
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_command_output() {
            println!("{}", self.theme.format_detail(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn failure(&mut self, msg: &str) {
        println!("{}", self.theme.format_failure(msg));
    }

    fn data(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Create the UI for this process.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(TerminalUI::with_colors(mode, false))
    } else {
        Box::new(TerminalUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_keeps_mode() {
        let ui = create_ui(OutputMode::Verbose, true);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
