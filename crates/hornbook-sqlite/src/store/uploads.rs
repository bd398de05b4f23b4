//! Uploaded-file audit storage

use crate::connection::SqlitePool;
use crate::error::SqliteResult;
use crate::store::parse_timestamp;
use chrono::Utc;
use hornbook_core::{FileKind, NewUploadedFile, UploadedFile};
use rusqlite::params;
use tracing::debug;

/// SQLite storage for worksheet upload records
#[derive(Clone)]
pub struct UploadStore {
    pool: SqlitePool,
}

impl UploadStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record an ingested file and return the row id
    pub fn record(&self, upload: &NewUploadedFile) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            conn.execute(
                "INSERT INTO uploaded_files
                     (filename, kind, lesson_id, problems_created, uploaded_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    upload.filename,
                    upload.kind.as_str(),
                    upload.lesson_id,
                    upload.problems_created,
                    Utc::now().to_rfc3339(),
                ],
            )?;
            let id = conn.last_insert_rowid();
            debug!(id, filename = %upload.filename, "Recorded upload");
            Ok(id)
        })
    }

    /// All upload records, most recent first
    pub fn list(&self) -> SqliteResult<Vec<UploadedFile>> {
        self.pool.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, filename, kind, lesson_id, problems_created, uploaded_at
                 FROM uploaded_files
                 ORDER BY uploaded_at DESC, id DESC",
            )?;
            let uploads = stmt
                .query_map([], row_to_upload)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(uploads)
        })
    }

    /// Number of recorded uploads
    pub fn count(&self) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            let count =
                conn.query_row("SELECT COUNT(*) FROM uploaded_files", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}

fn row_to_upload(row: &rusqlite::Row) -> rusqlite::Result<UploadedFile> {
    let kind_raw: String = row.get(2)?;
    let uploaded_raw: String = row.get(5)?;

    Ok(UploadedFile {
        id: row.get(0)?,
        filename: row.get(1)?,
        kind: FileKind::parse(&kind_raw),
        lesson_id: row.get(3)?,
        problems_created: row.get(4)?,
        uploaded_at: parse_timestamp(&uploaded_raw),
    })
}
