//! Ingestion error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("No text extraction available for {} files", .0.as_str())]
    UnsupportedKind(hornbook_core::FileKind),

    #[error("Storage error: {0}")]
    Storage(#[from] hornbook_sqlite::SqliteError),

    #[error("No subject named '{0}' exists; seed the curriculum first")]
    MissingSubject(String),

    #[error("Topic {0} does not exist")]
    UnknownTopic(i64),
}

pub type IngestResult<T> = Result<T, IngestError>;
