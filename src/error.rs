//! Error types for Breakdown
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Breakdown operations
pub type BreakdownResult<T> = Result<T, BreakdownError>;

/// Main error type for Breakdown operations
#[derive(Error, Debug)]
pub enum BreakdownError {
    /// Path does not conform to the active template
    #[error("path '{path}' does not match template '{template}'")]
    PatternMismatch { path: String, template: String },

    /// A placeholder has no value while formatting
    #[error("missing field '{field}' required by template '{template}'")]
    MissingField { field: String, template: String },

    /// A field map carries a field the template does not declare
    #[error("unknown field '{field}' for template '{template}'")]
    UnknownField { field: String, template: String },

    /// Template cannot be used (no version field, bad placeholder syntax)
    #[error("invalid template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },

    /// A file could not be removed during cleanup
    #[error("cannot delete {path}: {message}")]
    DeletionDenied { path: PathBuf, message: String },

    /// No reference with this identifier in the scene
    #[error("unknown reference '{id}'")]
    UnknownReference { id: String },

    /// No versions were discovered on disk for this reference
    #[error("no versions found on disk for '{id}'")]
    NoVersions { id: String },

    /// Cleanup sets of different kinds were mixed in one planning pass
    #[error("cannot plan elder and unused cleanup sets together")]
    MixedCleanupKinds,

    /// A root variable used by the template could not be resolved
    #[error("root variable '${name}' is not set")]
    UnresolvedRoot { name: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Invalid scene manifest
    #[error("invalid scene manifest {file}: {message}")]
    InvalidScene { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
