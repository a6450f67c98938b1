//! Error types and handling for txnpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`scan`]: Root and directory walk errors
//! - [`name`]: Name derivation and collision errors
//! - [`emit`]: Compression and output errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//!
//! Errors raised by generated code at run time live in [`crate::runtime`].

pub mod config;
pub mod emit;
pub mod fs;
pub mod name;
pub mod scan;

pub use config::invalid as config_invalid;
pub use emit::{compression_failed, emit_failed};
pub use fs::read_failed as file_read_failed;
pub use name::{collision as name_collision, invalid as invalid_name, reserved as reserved_name};
pub use scan::{root_not_found, scan_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for generation runs
#[derive(Error, Diagnostic, Debug)]
pub enum TxnpackError {
    // Scan errors
    #[error("Transaction root not found: {path}")]
    #[diagnostic(
        code(txnpack::scan::root_not_found),
        help("Pass --root or set DD_ROOT to a directory containing transaction/stx")
    )]
    RootNotFound { path: String },

    #[error("Failed to scan '{path}': {reason}")]
    #[diagnostic(code(txnpack::scan::failed))]
    ScanFailed { path: String, reason: String },

    // Naming errors
    #[error("Cannot derive a resource name from '{path}'")]
    #[diagnostic(
        code(txnpack::name::invalid),
        help("Resource files must live in a named directory and have a non-empty stem")
    )]
    InvalidName { path: String },

    #[error("Resource name '{name}' is derived from both '{first}' and '{second}'")]
    #[diagnostic(
        code(txnpack::name::collision),
        help("Rename one of the files or move it to a differently named directory")
    )]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("Resource name '{name}' from '{path}' maps to the generated symbol '{symbol}'")]
    #[diagnostic(
        code(txnpack::name::reserved),
        help("Rename the file or its directory; registry symbols cannot be reused")
    )]
    ReservedName {
        name: String,
        path: String,
        symbol: String,
    },

    // Emit errors
    #[error("Failed to compress '{path}': {reason}")]
    #[diagnostic(code(txnpack::emit::compression_failed))]
    CompressionFailed { path: String, reason: String },

    #[error("Failed to write generated file '{path}': {reason}")]
    #[diagnostic(
        code(txnpack::emit::write_failed),
        help("Check that the output directory exists and is writable")
    )]
    EmitFailed { path: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(txnpack::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(txnpack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(txnpack::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(txnpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },
}

impl From<serde_yaml::Error> for TxnpackError {
    fn from(err: serde_yaml::Error) -> Self {
        TxnpackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TxnpackError>;
