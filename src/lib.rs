//! Toolgate - fail a build when the installed toolchain is too old.
//!
//! Toolgate runs a toolchain's version command (`go version` by default),
//! takes the third field of the first output line as the installed version,
//! and compares it against a required minimum built from the toolchain name
//! and a command-line suffix.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types, exit codes and result aliases
//! - [`gate`] - The version gate and its report
//! - [`shell`] - External command execution
//! - [`toolchain`] - Version querying and comparison
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use toolgate::gate::VersionGate;
//! use toolgate::toolchain::{Comparison, StaticSource};
//!
//! let source = StaticSource::new("go version go10 linux/amd64\n");
//!
//! // Plain string ordering puts "go10" before "go9".
//! let report = VersionGate::new("go").check("9", &source).unwrap();
//! assert!(!report.satisfied);
//!
//! let report = VersionGate::new("go")
//!     .with_comparison(Comparison::Numeric)
//!     .check("9", &source)
//!     .unwrap();
//! assert!(report.satisfied);
//! ```

pub mod cli;
pub mod error;
pub mod gate;
pub mod shell;
pub mod toolchain;
pub mod ui;

pub use error::{GateError, Result};
