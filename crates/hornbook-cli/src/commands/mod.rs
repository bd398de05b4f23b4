//! Command implementations for the hornbook CLI
//!
//! Each module exposes an `execute` (or similarly named) function that takes
//! the resolved [`AppConfig`](crate::config::AppConfig) plus its own
//! arguments, opens what it needs, and prints its result. Commands talk to
//! the terminal here; the library crates underneath never print.

pub mod check_db;
pub mod config;
pub mod enrich;
pub mod ingest;
pub mod init_db;
pub mod progress;
pub mod seed;
