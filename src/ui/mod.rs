//! Console output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use toolgate::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("expect_version: go1.20");
//! ui.failure("real go version: go1.18");
//!
//! assert!(ui.has_message("go1.20"));
//! assert!(ui.has_failure("go1.18"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GateTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message (hidden in quiet mode).
    fn message(&mut self, msg: &str);

    /// Display secondary detail (verbose mode only).
    fn detail(&mut self, msg: &str);

    /// Display a success message (hidden in quiet mode).
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message on stderr.
    fn error(&mut self, msg: &str);

    /// Display a gate failure on stdout, in every mode.
    fn failure(&mut self, msg: &str);

    /// Write machine-readable output verbatim, in every mode.
    fn data(&mut self, text: &str);
}
