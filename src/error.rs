//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when saving or loading an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The book file does not exist
    #[error("Address book file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents could not be turned back into a book
    #[error("Failed to deserialize address book: {0}")]
    Deserialization(String),

    /// The file was written by an unknown format version
    #[error("Unsupported address book format version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
