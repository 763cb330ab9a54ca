//! Version check command implementation.
//!
//! `toolgate <VERSION>` queries the toolchain and fails the invocation when
//! the installed version sorts before the required one.

use std::cmp::Ordering;

use crate::cli::args::CheckArgs;
use crate::error::{GateError, Result};
use crate::gate::{GateReport, VersionGate};
use crate::toolchain::{CommandSource, Comparison, VersionSource};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    source: Option<Box<dyn VersionSource>>,
}

impl CheckCommand {
    /// Create a check command that runs the configured query command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args, source: None }
    }

    /// Use `source` instead of running the query command.
    pub fn with_source(mut self, source: Box<dyn VersionSource>) -> Self {
        self.source = Some(source);
        self
    }

    fn gate(&self) -> VersionGate {
        VersionGate::new(self.args.toolchain.clone()).with_comparison(self.args.compare)
    }

    fn evaluate(
        &self,
        gate: &VersionGate,
        suffix: &str,
        source: &dyn VersionSource,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!(source = %source.describe(), "querying toolchain");
        if ui.output_mode().shows_command_output() && !self.args.json {
            ui.detail(&format!("query: {}", source.describe()));
        }

        let report = gate.check(suffix, source)?;
        if lexical_disagrees(&report) {
            ui.warning(&format!(
                "{} vs {}: plain string ordering disagrees with numeric ordering; consider --compare numeric",
                report.installed, report.required
            ));
        }

        if self.args.json {
            ui.data(&report.to_json()?);
        }

        match report.ensure_satisfied() {
            Ok(()) => {
                if !self.args.json {
                    ui.success(&format!("{} satisfies {}", report.installed, report.required));
                }
                Ok(CommandResult::success())
            }
            Err(err) => {
                if !self.args.json {
                    ui.failure(&format!(
                        "real {} version: {}",
                        report.toolchain, report.installed
                    ));
                }
                Ok(CommandResult::failure(err.exit_code()))
            }
        }
    }
}

/// Whether a lexical verdict would flip under numeric ordering.
fn lexical_disagrees(report: &GateReport) -> bool {
    if report.comparison != Comparison::Lexical {
        return false;
    }
    Comparison::Numeric
        .compare(&report.installed, &report.required, &report.toolchain)
        .map(|ord| (ord != Ordering::Less) != report.satisfied)
        .unwrap_or(false)
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(suffix) = self.args.min_version.as_deref() else {
            let err = GateError::MissingArgument;
            ui.failure(&err.to_string());
            return Ok(CommandResult::failure(err.exit_code()));
        };

        let gate = self.gate();
        if !self.args.json {
            ui.message(&format!("expect_version: {}", gate.required_version(suffix)));
        }

        match &self.source {
            Some(source) => self.evaluate(&gate, suffix, source.as_ref(), ui),
            None => {
                let source = CommandSource::parse(&self.args.query_command())?;
                self.evaluate(&gate, suffix, &source, ui)
            }
        }
    }
}
