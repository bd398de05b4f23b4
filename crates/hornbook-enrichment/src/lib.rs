//! # Hornbook Enrichment
//!
//! Best-effort educational fact fetching from public APIs.
//!
//! Four sources are supported:
//! - **Wikipedia**: article summary extracts
//! - **Dictionary**: first definition from dictionaryapi.dev
//! - **NASA**: Astronomy Picture of the Day title and explanation
//! - **Trivia**: one question from the Open Trivia Database
//!
//! ## Contract
//!
//! [`FactClient::fetch`] never fails. The lookup order is:
//! 1. Fresh entry in the shared `api_cache` table (within the TTL)
//! 2. The network, one GET with a timeout; success is written through
//!    to the cache
//! 3. The source's canned fallback text
//!
//! Every returned [`Fact`] carries a [`FactOrigin`] so callers can tell a
//! live answer from a canned one. Network and cache errors are logged at
//! `warn` and swallowed; nothing in the lesson flow depends on this crate
//! succeeding.

pub mod client;
pub mod error;
pub mod response;
pub mod source;

// Re-exports
pub use client::{EnrichmentConfig, Fact, FactClient, FactOrigin};
pub use error::{EnrichmentError, EnrichmentResult};
pub use source::FactSource;
