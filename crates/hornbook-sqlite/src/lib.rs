//! SQLite storage backend for hornbook
//!
//! A single SQLite file holds the whole curriculum hierarchy plus student
//! progress, worksheet upload records, the enrichment API cache, and
//! educational standards. Access goes through [`SqlitePool`] (one connection
//! behind a mutex, WAL mode) and a set of per-concern stores:
//!
//! - [`CurriculumStore`]: subjects, topics, lessons, practice problems
//! - [`ProgressStore`]: student attempt tracking and mastery derivation
//! - [`UploadStore`]: audit rows for ingested worksheets
//! - [`ApiCacheStore`]: TTL cache for best-effort API responses
//! - [`StandardStore`]: grade-level standard codes
//!
//! All calls are synchronous; every insert commits on its own. Duplicate
//! prevention for subjects lives in the seeding layer (an existence check by
//! name), not here; only `subjects.name` carries a UNIQUE constraint.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hornbook_sqlite::{CurriculumStore, SqliteConfig, SqlitePool};
//!
//! let pool = SqlitePool::new(SqliteConfig::new("./tutor_app.db"))?;
//! let store = CurriculumStore::new(pool.clone());
//! let subjects = store.get_all_subjects()?;
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod schema;
pub mod store;

// Re-exports
pub use config::SqliteConfig;
pub use connection::{DbStats, SqlitePool};
pub use error::{SqliteError, SqliteResult};
pub use store::cache::ApiCacheStore;
pub use store::curriculum::{CurriculumStore, SubjectBreakdown, TableCounts};
pub use store::progress::{ProgressEntry, ProgressStore};
pub use store::standards::StandardStore;
pub use store::uploads::UploadStore;
