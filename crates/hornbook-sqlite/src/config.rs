//! SQLite connection configuration
//!
//! Explicit configuration handed to [`SqlitePool::new`]; the database path is
//! resolved by the caller (CLI config layer) rather than read from any global
//! state.
//!
//! [`SqlitePool::new`]: crate::connection::SqlitePool::new

use std::path::PathBuf;

/// Connection settings for the SQLite backend
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file path, or `:memory:` for an in-memory database
    pub path: PathBuf,
    /// Enable WAL journal mode (better read concurrency on file databases)
    pub wal_mode: bool,
    /// Enforce foreign key constraints
    pub foreign_keys: bool,
    /// How long a blocked statement waits before failing
    pub busy_timeout_ms: u32,
    /// Page cache size; negative values are KiB (SQLite convention)
    pub cache_size: i32,
}

impl SqliteConfig {
    /// Configuration for a file-backed database at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            wal_mode: true,
            foreign_keys: true,
            busy_timeout_ms: 5_000,
            cache_size: -8_192,
        }
    }

    /// Configuration for an in-memory database (tests)
    ///
    /// WAL mode is meaningless without a file, so it is left off.
    pub fn memory() -> Self {
        Self {
            wal_mode: false,
            ..Self::new(":memory:")
        }
    }

    /// Whether this configuration points at an in-memory database
    pub fn is_memory(&self) -> bool {
        self.path.to_str() == Some(":memory:")
    }
}
