//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Every gate option can also be
//! set through a `TOOLGATE_*` environment variable; the flag wins.

use clap::Parser;
use clap_complete::Shell;

use crate::gate::DEFAULT_TOOLCHAIN;
use crate::toolchain::Comparison;

/// Toolgate - fail the build when the installed toolchain is too old.
#[derive(Debug, Parser)]
#[command(name = "toolgate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub check: CheckArgs,

    /// Show the toolchain query command
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Arguments for the version check.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Minimum version, without the toolchain prefix (e.g. 1.20)
    #[arg(value_name = "VERSION")]
    pub min_version: Option<String>,

    /// Positionals after the version are accepted and ignored
    #[arg(hide = true, value_name = "IGNORED")]
    pub extra: Vec<String>,

    /// Toolchain name; prefixes the required version
    #[arg(short, long, env = "TOOLGATE_TOOLCHAIN", default_value = DEFAULT_TOOLCHAIN)]
    pub toolchain: String,

    /// Command that prints the version (default: "<toolchain> version")
    #[arg(long, env = "TOOLGATE_QUERY")]
    pub query: Option<String>,

    /// How to compare versions
    #[arg(long, env = "TOOLGATE_COMPARE", value_enum, default_value_t = Comparison::Lexical)]
    pub compare: Comparison,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            min_version: None,
            extra: Vec::new(),
            toolchain: DEFAULT_TOOLCHAIN.to_string(),
            query: None,
            compare: Comparison::default(),
            json: false,
        }
    }
}

impl CheckArgs {
    /// The query command line, falling back to `<toolchain> version`.
    pub fn query_command(&self) -> String {
        self.query
            .clone()
            .unwrap_or_else(|| format!("{} version", self.toolchain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_version() {
        let cli = Cli::parse_from(["toolgate", "1.20"]);
        assert_eq!(cli.check.min_version.as_deref(), Some("1.20"));
        assert_eq!(cli.check.compare, Comparison::Lexical);
    }

    #[test]
    fn version_is_optional_at_parse_time() {
        let cli = Cli::parse_from(["toolgate"]);
        assert!(cli.check.min_version.is_none());
    }

    #[test]
    fn extra_positionals_are_ignored() {
        let cli = Cli::parse_from([
            "toolgate",
            "1.20",
            "extra",
            "--query",
            "echo go version go1.21 x",
            "more",
        ]);
        assert_eq!(cli.check.min_version.as_deref(), Some("1.20"));
        assert_eq!(cli.check.query.as_deref(), Some("echo go version go1.21 x"));
        assert_eq!(cli.check.extra, ["extra", "more"]);
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let err = Cli::try_parse_from(["toolgate", "--bogus", "1.20"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn help_is_not_a_usage_error() {
        let err = Cli::try_parse_from(["toolgate", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::parse_from([
            "toolgate",
            "--toolchain",
            "node",
            "--query",
            "node --version",
            "--compare",
            "numeric",
            "--json",
            "--quiet",
            "18",
        ]);
        assert_eq!(cli.check.toolchain, "node");
        assert_eq!(cli.check.query.as_deref(), Some("node --version"));
        assert_eq!(cli.check.compare, Comparison::Numeric);
        assert!(cli.check.json);
        assert!(cli.quiet);
    }

    #[test]
    fn query_command_defaults_from_toolchain() {
        let args = CheckArgs {
            toolchain: "zig".into(),
            ..Default::default()
        };
        assert_eq!(args.query_command(), "zig version");
        assert_eq!(CheckArgs::default().query_command(), "go version");
    }

    #[test]
    fn parses_completions_flag() {
        let cli = Cli::parse_from(["toolgate", "--completions", "bash"]);
        assert_eq!(cli.completions, Some(Shell::Bash));
    }
}
