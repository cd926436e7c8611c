//! Error types and handling for Rulepack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Sub-modules hold convenience constructors grouped by error domain:
//! - [`fs`]: File system errors
//! - [`config`]: Section catalog configuration errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Rulepack operations
#[derive(Error, Diagnostic, Debug)]
pub enum RulepackError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(rulepack::fs::not_found),
        help("Check the path, or pass --workspace to point at the project root")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(rulepack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(rulepack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(
        code(rulepack::fs::dir_read_failed),
        help("Fragment directories are .cursor/rules and .github/instructions under the workspace")
    )]
    DirectoryReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(rulepack::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(rulepack::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(rulepack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(rulepack::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid glob '{pattern}' for section '{section}': {reason}")]
    #[diagnostic(
        code(rulepack::config::invalid_glob),
        help("Globs use wax syntax, e.g. \"**/*.rs\" or \"src/**/*.{{ts,tsx}}\"")
    )]
    InvalidGlob {
        section: String,
        pattern: String,
        reason: String,
    },
}

impl From<std::io::Error> for RulepackError {
    fn from(err: std::io::Error) -> Self {
        RulepackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RulepackError>;
