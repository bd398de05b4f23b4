//! Enrichment error types
//!
//! Deliberately small: fetch failures never surface as errors (the client
//! substitutes a canned fallback), so only setup and parse problems remain.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Unknown fact source '{0}' (expected wikipedia, dictionary, nasa or trivia)")]
    UnknownSource(String),
}

pub type EnrichmentResult<T> = Result<T, EnrichmentError>;
