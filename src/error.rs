//! Error types for pathmap-migrator
//!
//! This module defines the error hierarchy for the scan pipeline:
//! - Configuration and CLI errors
//! - Storage-volume validation errors
//! - Batch file write errors
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Leaf components return errors as values; the coordinator owns the
//!   log-and-continue vs. abort policy
//! - Errors should be actionable - include the path that failed

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the pathmap-migrator application
#[derive(Error, Debug)]
pub enum MigratorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage-volume validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Batch file errors
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    /// I/O errors (work-dir preparation, status file, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid batch size
    #[error("Invalid batch size {size}: must be at least 1")]
    InvalidBatchSize { size: usize },
}

/// Storage-volume validation errors
///
/// Any of these is terminal: the process exits nonzero without preparing
/// the work dir or scanning anything.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Base dir missing or not a directory
    #[error("base dir '{path}' does not exist or is not a directory")]
    BaseDirInvalid { path: PathBuf },

    /// Base dir exists but lacks the marker subdirectory
    #[error("base dir '{path}' is not a valid artifact storage volume: missing '{marker}' subdirectory")]
    NotAStorageVolume { path: PathBuf, marker: &'static str },
}

/// Batch file write errors
#[derive(Error, Debug)]
pub enum BatchError {
    /// Failed to open or create a batch file
    #[error("Failed to open batch file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to a batch file
    #[error("Failed to write batch file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for MigratorError
pub type Result<T> = std::result::Result<T, MigratorError>;

/// Result type alias for BatchError
pub type BatchResult<T> = std::result::Result<T, BatchError>;
