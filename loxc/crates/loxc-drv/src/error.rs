//! Error handling for the Lox driver.
//!
//! Lexical problems are not driver errors: they are reported through the
//! scanner's reporter and counted in a [`RunOutcome`](crate::RunOutcome).
//! This module covers everything around the scan: files, configuration,
//! output and logging setup.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a script that produced lexical errors (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: u8 = 65;

/// Exit status for a script path that does not exist (`EX_NOINPUT`).
pub const EXIT_NO_INPUT: u8 = 66;

/// Exit status for any other driver failure.
pub const EXIT_FAILURE: u8 = 1;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The script path does not exist.
    #[error("Lox file could not be found. Provide an existing path.")]
    FileNotFound(PathBuf),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A token could not be written as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl DriverError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::FileNotFound(_) => EXIT_NO_INPUT,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
