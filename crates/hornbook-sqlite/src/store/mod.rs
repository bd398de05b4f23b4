//! Typed stores over the shared connection pool
//!
//! Each store borrows a clone of [`SqlitePool`](crate::connection::SqlitePool)
//! and exposes the operations for one slice of the schema. Stores are cheap to
//! clone and safe to share.

pub mod cache;
pub mod curriculum;
pub mod progress;
pub mod standards;
pub mod uploads;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Deserialize a JSON text column inside a row-mapping closure
///
/// Maps serde failures onto [`rusqlite::Error::FromSqlConversionFailure`] so
/// they surface through the normal query error path with the column index
/// attached.
pub(crate) fn json_column<T: serde::de::DeserializeOwned>(
    idx: usize,
    raw: &str,
) -> rusqlite::Result<T> {
    serde_json::from_str(raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a stored timestamp
///
/// Rows written by the stores carry RFC 3339 strings; rows that fell through
/// to a column default carry SQLite's `datetime('now')` format instead, so
/// both are accepted.
pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_column_parses_arrays() {
        let steps: Vec<String> = json_column(0, r#"["first","second"]"#).unwrap();
        assert_eq!(steps, vec!["first".to_string(), "second".to_string()]);

        let empty: Vec<String> = json_column(0, "[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_json_column_reports_column_index() {
        let result: rusqlite::Result<Vec<String>> = json_column(4, "not json");
        match result {
            Err(rusqlite::Error::FromSqlConversionFailure(idx, _, _)) => assert_eq!(idx, 4),
            other => panic!("expected conversion failure, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_timestamp_accepts_both_formats() {
        let rfc = parse_timestamp("2025-06-01T10:30:00+00:00");
        assert_eq!(rfc.to_rfc3339(), "2025-06-01T10:30:00+00:00");

        let sqlite_default = parse_timestamp("2025-06-01 10:30:00");
        assert_eq!(sqlite_default, rfc);
    }
}
