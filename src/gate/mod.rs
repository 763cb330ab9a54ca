//! The version gate.
//!
//! A [`VersionGate`] builds the required version from a toolchain prefix and
//! a user-supplied suffix, asks a [`VersionSource`] for the installed
//! version, and reports whether the installed version is new enough.
//!
//! # Example
//!
//! ```
//! use toolgate::gate::VersionGate;
//! use toolgate::toolchain::StaticSource;
//!
//! let gate = VersionGate::new("go");
//! let source = StaticSource::new("go version go1.21 linux/amd64\n");
//! let report = gate.check("1.20", &source).unwrap();
//! assert_eq!(report.required, "go1.20");
//! assert_eq!(report.installed, "go1.21");
//! assert!(report.satisfied);
//! ```

pub mod report;

pub use report::GateReport;

use std::cmp::Ordering;

use crate::error::Result;
use crate::toolchain::{installed_version, Comparison, VersionSource};

/// Toolchain prefix used when none is configured.
pub const DEFAULT_TOOLCHAIN: &str = "go";

/// Compares an installed toolchain version against a required minimum.
#[derive(Debug, Clone)]
pub struct VersionGate {
    toolchain: String,
    comparison: Comparison,
}

impl Default for VersionGate {
    fn default() -> Self {
        Self::new(DEFAULT_TOOLCHAIN)
    }
}

impl VersionGate {
    /// Create a gate for `toolchain` using lexical comparison.
    pub fn new(toolchain: impl Into<String>) -> Self {
        Self {
            toolchain: toolchain.into(),
            comparison: Comparison::default(),
        }
    }

    /// Use a different comparison strategy.
    pub fn with_comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// The toolchain name, also the version prefix.
    pub fn toolchain(&self) -> &str {
        &self.toolchain
    }

    /// The comparison strategy in use.
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Build the required version string: prefix followed by `suffix`.
    pub fn required_version(&self, suffix: &str) -> String {
        format!("{}{}", self.toolchain, suffix)
    }

    /// Query `source` and compare its version against `prefix + suffix`.
    ///
    /// A too-old toolchain is not an error here; see
    /// [`GateReport::ensure_satisfied`].
    pub fn check(&self, suffix: &str, source: &dyn VersionSource) -> Result<GateReport> {
        let required = self.required_version(suffix);
        let installed = installed_version(source)?;

        let ordering = self
            .comparison
            .compare(&installed, &required, &self.toolchain)?;
        let satisfied = ordering != Ordering::Less;

        tracing::info!(
            toolchain = %self.toolchain,
            %installed,
            %required,
            comparison = %self.comparison,
            satisfied,
            "version gate evaluated"
        );

        Ok(GateReport {
            toolchain: self.toolchain.clone(),
            required,
            installed,
            comparison: self.comparison,
            satisfied,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GateError;
    use crate::toolchain::StaticSource;

    #[test]
    fn required_version_is_prefix_plus_suffix() {
        let gate = VersionGate::new("go");
        for suffix in ["1.20", "1.21.5", "", "9", "x y"] {
            assert_eq!(gate.required_version(suffix), format!("go{}", suffix));
        }
    }

    #[test]
    fn default_gate_targets_go_lexically() {
        let gate = VersionGate::default();
        assert_eq!(gate.toolchain(), "go");
        assert_eq!(gate.comparison(), Comparison::Lexical);
    }

    #[test]
    fn newer_installed_version_passes() {
        let source = StaticSource::new("go version go1.21 linux/amd64\n");
        let report = VersionGate::new("go").check("1.20", &source).unwrap();
        assert!(report.satisfied);
        assert!(report.ensure_satisfied().is_ok());
    }

    #[test]
    fn equal_version_passes() {
        let source = StaticSource::new("go version go1.20 linux/amd64\n");
        let report = VersionGate::new("go").check("1.20", &source).unwrap();
        assert!(report.satisfied);
    }

    #[test]
    fn older_installed_version_fails() {
        let source = StaticSource::new("go version go1.18 linux/amd64\n");
        let report = VersionGate::new("go").check("1.20", &source).unwrap();
        assert!(!report.satisfied);
        assert_eq!(report.installed, "go1.18");

        let err = report.ensure_satisfied().unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn lexical_gate_keeps_digit_boundary_limitation() {
        let source = StaticSource::new("go version go10 linux/amd64\n");
        let report = VersionGate::new("go").check("9", &source).unwrap();
        assert!(!report.satisfied);
    }

    #[test]
    fn numeric_gate_fixes_digit_boundary() {
        let source = StaticSource::new("go version go10 linux/amd64\n");
        let report = VersionGate::new("go")
            .with_comparison(Comparison::Numeric)
            .check("9", &source)
            .unwrap();
        assert!(report.satisfied);
        assert_eq!(report.comparison, Comparison::Numeric);
    }

    #[test]
    fn empty_output_fails_with_query_error() {
        let source = StaticSource::new("");
        let err = VersionGate::new("go").check("1.20", &source).unwrap_err();
        assert!(matches!(err, GateError::ToolchainQueryFailed { .. }));
    }

    #[test]
    fn other_toolchain_prefix() {
        let source = StaticSource::new("node version node20.11.0 linux-x64\n");
        let report = VersionGate::new("node").check("18", &source).unwrap();
        assert_eq!(report.required, "node18");
        assert!(report.satisfied);
    }
}
