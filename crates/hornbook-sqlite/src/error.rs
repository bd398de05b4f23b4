//! Error types for SQLite storage

use thiserror::Error;

/// SQLite storage error type
#[derive(Error, Debug)]
pub enum SqliteError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution error
    #[error("Query error: {0}")]
    Query(String),

    /// Schema/migration error
    #[error("Schema error: {0}")]
    Schema(String),

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON column (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

impl From<serde_json::Error> for SqliteError {
    fn from(err: serde_json::Error) -> Self {
        SqliteError::Serialization(err.to_string())
    }
}

/// Result type for SQLite operations
pub type SqliteResult<T> = Result<T, SqliteError>;
