//! Fetch-through cache for enrichment API payloads
//!
//! Keys are "source:term" strings; payloads are the fact text verbatim.
//! Reads enforce the caller's TTL instead of deleting stale rows, so a
//! stale entry simply gets overwritten on the next successful fetch.

use crate::connection::SqlitePool;
use crate::error::SqliteResult;
use crate::store::parse_timestamp;
use chrono::{Duration, Utc};
use rusqlite::{params, OptionalExtension};
use tracing::debug;

/// SQLite storage for cached API responses
#[derive(Clone)]
pub struct ApiCacheStore {
    pool: SqlitePool,
}

impl ApiCacheStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch a cached payload if it is younger than `max_age_secs`
    pub fn get(&self, key: &str, max_age_secs: u64) -> SqliteResult<Option<String>> {
        self.pool.with_connection(|conn| {
            let row: Option<(String, String)> = conn
                .query_row(
                    "SELECT payload, fetched_at FROM api_cache WHERE cache_key = ?1",
                    [key],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            let Some((payload, fetched_raw)) = row else {
                return Ok(None);
            };

            let age = Utc::now().signed_duration_since(parse_timestamp(&fetched_raw));
            if age > Duration::seconds(max_age_secs as i64) {
                debug!(key, age_secs = age.num_seconds(), "Cache entry is stale");
                return Ok(None);
            }

            debug!(key, "Cache hit");
            Ok(Some(payload))
        })
    }

    /// Store a payload, replacing any previous entry for the key
    pub fn put(&self, key: &str, payload: &str) -> SqliteResult<()> {
        self.pool.with_connection(|conn| {
            conn.execute(
                "INSERT INTO api_cache (cache_key, payload, fetched_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(cache_key) DO UPDATE SET
                     payload = excluded.payload,
                     fetched_at = excluded.fetched_at",
                params![key, payload, Utc::now().to_rfc3339()],
            )?;
            Ok(())
        })
    }

    /// Number of cached entries, fresh or stale
    pub fn count(&self) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM api_cache", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}
