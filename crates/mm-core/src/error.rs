//! Error types for mm-core

use thiserror::Error;

/// Core error type for merge-migrations
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config {path}: {source}")]
    ConfigParseError {
        path: String,
        source: serde_yaml::Error,
    },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: Migrations directory could not be listed
    #[error("[E004] Failed to list migrations directory '{path}': {source}")]
    ListDirectory {
        path: String,
        source: std::io::Error,
    },

    /// E005: Output directory could not be created
    #[error("[E005] Failed to create output directory '{path}': {source}")]
    CreateOutputDir {
        path: String,
        source: std::io::Error,
    },

    /// E006: Output file could not be written
    #[error("[E006] Failed to write output file '{path}': {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },

    /// E007: Invalid file name pattern
    #[error("[E007] Invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// E016: IO error with file path context
    #[error("[E016] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
