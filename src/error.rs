//! Error types for toolgate operations.
//!
//! This module defines [`GateError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each gate failure kind is a distinct `GateError` variant
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors
//! - [`GateError::exit_code`] is the only place kinds map to process codes

use thiserror::Error;

/// Exit code when the installed toolchain is older than required.
pub const EXIT_VERSION_TOO_LOW: u8 = 1;

/// Exit code when no required version was supplied.
pub const EXIT_MISSING_ARGUMENT: u8 = 2;

/// Exit code when the toolchain could not be queried or understood.
pub const EXIT_QUERY_FAILED: u8 = 3;

/// Exit code for an invocation clap rejects (unknown flag, bad value).
///
/// Kept apart from the gate codes so callers can tell a mistyped command
/// from a gate verdict. Matches `EX_USAGE` from `sysexits.h`.
pub const EXIT_USAGE: u8 = 64;

/// Core error type for toolgate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// No required version was given on the command line.
    #[error("not include version info: pass the minimum version, e.g. `toolgate 1.20`")]
    MissingArgument,

    /// The installed toolchain is older than the required version.
    #[error("installed version {installed} is older than required {required}")]
    VersionTooLow { installed: String, required: String },

    /// The version-query command could not be run or produced unusable output.
    #[error("Toolchain query `{command}` failed: {message}")]
    ToolchainQueryFailed { command: String, message: String },

    /// A version string had no numeric components to compare.
    #[error("Unrecognized version string: {version}")]
    UnrecognizedVersion { version: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GateError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::VersionTooLow { .. } => EXIT_VERSION_TOO_LOW,
            Self::MissingArgument => EXIT_MISSING_ARGUMENT,
            Self::ToolchainQueryFailed { .. } | Self::UnrecognizedVersion { .. } => {
                EXIT_QUERY_FAILED
            }
            Self::Io(_) | Self::Other(_) => 1,
        }
    }
}

/// Result type alias for toolgate operations.
pub type Result<T> = std::result::Result<T, GateError>;
