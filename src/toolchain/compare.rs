//! Ordering installed and required versions.
//!
//! The default [`Comparison::Lexical`] orders the full strings byte by byte,
//! so `go10` sorts before `go9`. [`Comparison::Numeric`] compares the dotted
//! numeric run after the toolchain prefix instead.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{GateError, Result};

static RE_NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+(?:\.\d+)*)").unwrap());

/// How installed and required versions are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Plain string ordering of the full version strings.
    #[default]
    Lexical,
    /// Integer ordering of dotted version components.
    Numeric,
}

impl FromStr for Comparison {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexical" => Ok(Self::Lexical),
            "numeric" => Ok(Self::Numeric),
            _ => Err(format!("unknown comparison: {}", s)),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Numeric => write!(f, "numeric"),
        }
    }
}

impl Comparison {
    /// Order `installed` relative to `required`.
    ///
    /// `prefix` is the toolchain name, stripped before numeric parsing.
    pub fn compare(&self, installed: &str, required: &str, prefix: &str) -> Result<Ordering> {
        match self {
            Self::Lexical => Ok(installed.cmp(required)),
            Self::Numeric => {
                let installed = parse_components(installed, prefix)?;
                let required = parse_components(required, prefix)?;
                Ok(compare_components(&installed, &required))
            }
        }
    }
}

/// Extract numeric components from a version string.
///
/// The toolchain prefix is removed first when present, then the leading
/// dotted digit run is taken: `go1.21rc1` yields `[1, 21]`.
pub fn numeric_components(version: &str, prefix: &str) -> Option<Vec<u64>> {
    let rest = version.strip_prefix(prefix).unwrap_or(version);
    let caps = RE_NUMERIC_RUN.captures(rest)?;
    caps[1].split('.').map(|part| part.parse().ok()).collect()
}

fn parse_components(version: &str, prefix: &str) -> Result<Vec<u64>> {
    numeric_components(version, prefix).ok_or_else(|| GateError::UnrecognizedVersion {
        version: version.to_string(),
    })
}

/// Compare component lists, treating missing trailing components as zero.
fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let l = a.get(i).copied().unwrap_or(0);
        let r = b.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
