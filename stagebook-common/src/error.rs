//! Common error types for Stagebook

use thiserror::Error;

use crate::validation::FieldErrors;

/// Common result type for Stagebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the data layer and the web server
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Submitted form failed validation; carries per-field messages
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Stored delimited string could not be decoded
    #[error("Codec error: {0}")]
    Codec(String),
}
