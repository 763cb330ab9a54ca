//! Toolchain version querying and comparison.
//!
//! # Modules
//!
//! - [`query`] - Running the version-query command and extracting the version
//! - [`compare`] - Lexical and numeric version ordering

pub mod compare;
pub mod query;

pub use compare::{numeric_components, Comparison};
pub use query::{
    installed_version, parse_version_output, CommandSource, StaticSource, VersionSource,
};
