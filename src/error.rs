//! Error types for Yatube.

use thiserror::Error;

/// Common error type for Yatube.
#[derive(Error, Debug)]
pub enum YatubeError {
    /// Database error.
    ///
    /// Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A mutation was attempted by an anonymous viewer.
    #[error("authentication required: {0}")]
    Unauthorized(String),

    /// The viewer is known but may not touch the resource.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for YatubeError {
    fn from(e: sqlx::Error) -> Self {
        YatubeError::Database(e.to_string())
    }
}

/// Result type alias for Yatube operations.
pub type Result<T> = std::result::Result<T, YatubeError>;
