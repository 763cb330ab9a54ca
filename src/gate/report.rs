//! Gate evaluation results.

use serde::Serialize;

use crate::error::{GateError, Result};
use crate::toolchain::Comparison;

/// Outcome of a single gate check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateReport {
    /// Toolchain name (also the version prefix).
    pub toolchain: String,
    /// Required minimum version, prefix included.
    pub required: String,
    /// Version reported by the toolchain.
    pub installed: String,
    /// Strategy used to order the two.
    pub comparison: Comparison,
    /// Whether `installed` is at least `required`.
    pub satisfied: bool,
}

impl GateReport {
    /// Turn an unsatisfied report into [`GateError::VersionTooLow`].
    pub fn ensure_satisfied(&self) -> Result<()> {
        if self.satisfied {
            Ok(())
        } else {
            Err(GateError::VersionTooLow {
                installed: self.installed.clone(),
                required: self.required.clone(),
            })
        }
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GateError::Other(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(satisfied: bool) -> GateReport {
        GateReport {
            toolchain: "go".into(),
            required: "go1.20".into(),
            installed: if satisfied { "go1.21" } else { "go1.18" }.into(),
            comparison: Comparison::Lexical,
            satisfied,
        }
    }

    #[test]
    fn satisfied_report_is_ok() {
        assert!(report(true).ensure_satisfied().is_ok());
    }

    #[test]
    fn unsatisfied_report_is_version_too_low() {
        let err = report(false).ensure_satisfied().unwrap_err();
        match err {
            GateError::VersionTooLow {
                installed,
                required,
            } => {
                assert_eq!(installed, "go1.18");
                assert_eq!(required, "go1.20");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn json_uses_lowercase_comparison() {
        let json = report(true).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["comparison"], "lexical");
        assert_eq!(value["installed"], "go1.21");
        assert_eq!(value["satisfied"], true);
    }
}
