//! Core error types for the steplog activity logger.
//!
//! This module defines storage-agnostic error types. Engine-specific errors
//! (from Diesel, the key-value file, etc.) are converted to these types by the
//! storage crates.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the activity logger.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Key-value store error: {0}")]
    KeyValue(String),
}

/// Database-agnostic error type for the primary engine.
///
/// Every variant carries a string so the storage layer can convert
/// engine-specific errors into it.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open the database file.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// A database query failed to execute (including a missing table).
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::KeyValue(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::KeyValue(err.to_string())
    }
}
