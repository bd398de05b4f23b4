//! Schema management and migrations

use crate::error::{SqliteError, SqliteResult};
use rusqlite::Connection;
use tracing::{debug, info};

/// Schema version - increment when making schema changes
const SCHEMA_VERSION: i32 = 1;

/// Apply all pending migrations
pub fn apply_migrations(conn: &Connection) -> SqliteResult<()> {
    // Create migrations table if it doesn't exist
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let current_version = get_current_version(conn)?;
    debug!(current_version, target_version = SCHEMA_VERSION, "Checking migrations");

    if current_version < SCHEMA_VERSION {
        info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Applying schema migrations"
        );
        apply_migration_v1(conn)?;
    }

    Ok(())
}

/// Get current schema version
fn get_current_version(conn: &Connection) -> SqliteResult<i32> {
    let version: Option<i32> = conn
        .query_row(
            "SELECT MAX(version) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(None);

    Ok(version.unwrap_or(0))
}

/// Record that a migration was applied
fn record_migration(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO schema_migrations (version) VALUES (?)",
        [version],
    )?;
    Ok(())
}

/// Migration v1: curriculum, progress, uploads, cache and standards tables
fn apply_migration_v1(conn: &Connection) -> SqliteResult<()> {
    debug!("Applying migration v1: initial curriculum schema");

    conn.execute_batch(SCHEMA_V1)
        .map_err(|e| SqliteError::Schema(format!("Failed to apply v1 schema: {}", e)))?;

    record_migration(conn, 1)?;
    info!("Migration v1 applied successfully");
    Ok(())
}

/// Initial schema SQL
///
/// List-valued lesson/problem fields (`teaching_steps`, `examples`,
/// `solution_steps`, `hints`) are JSON arrays stored as TEXT.
const SCHEMA_V1: &str = r#"
-- ============================================================================
-- TABLE: subjects
-- ============================================================================
-- Root of the curriculum hierarchy. `name` is the only UNIQUE column in the
-- schema; the seeder's idempotence check relies on it.

CREATE TABLE IF NOT EXISTS subjects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT '',
    icon TEXT NOT NULL DEFAULT '',
    display_order INTEGER NOT NULL DEFAULT 0
);

-- ============================================================================
-- TABLE: topics
-- ============================================================================

CREATE TABLE IF NOT EXISTS topics (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    subject_id INTEGER NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    display_order INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_topics_subject ON topics(subject_id, display_order);

-- ============================================================================
-- TABLE: lessons
-- ============================================================================

CREATE TABLE IF NOT EXISTS lessons (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    topic_id INTEGER NOT NULL REFERENCES topics(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    teaching_steps TEXT NOT NULL DEFAULT '[]',
    examples TEXT NOT NULL DEFAULT '[]',
    source_type TEXT NOT NULL DEFAULT 'builtin',
    display_order INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_lessons_topic ON lessons(topic_id, display_order);

-- ============================================================================
-- TABLE: practice_problems
-- ============================================================================

CREATE TABLE IF NOT EXISTS practice_problems (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    lesson_id INTEGER NOT NULL REFERENCES lessons(id) ON DELETE CASCADE,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    solution_steps TEXT NOT NULL DEFAULT '[]',
    hints TEXT NOT NULL DEFAULT '[]',
    difficulty TEXT NOT NULL DEFAULT 'medium',
    display_order INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_problems_lesson ON practice_problems(lesson_id, display_order);

-- ============================================================================
-- TABLE: uploaded_files
-- ============================================================================
-- One audit row per worksheet fed to the ingestion pipeline. The lesson link
-- survives as NULL if the lesson is ever removed.

CREATE TABLE IF NOT EXISTS uploaded_files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    filename TEXT NOT NULL,
    kind TEXT NOT NULL DEFAULT 'unknown',
    lesson_id INTEGER REFERENCES lessons(id) ON DELETE SET NULL,
    problems_created INTEGER NOT NULL DEFAULT 0,
    uploaded_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- TABLE: student_progress
-- ============================================================================
-- The only mutable table. `problem_id` is NULL for lesson-level rows, so the
-- store looks rows up with `problem_id IS ?` rather than relying on a UNIQUE
-- constraint (SQLite treats NULLs as distinct in unique indexes).

CREATE TABLE IF NOT EXISTS student_progress (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    lesson_id INTEGER NOT NULL REFERENCES lessons(id) ON DELETE CASCADE,
    problem_id INTEGER REFERENCES practice_problems(id) ON DELETE CASCADE,
    attempts INTEGER NOT NULL DEFAULT 0,
    score REAL NOT NULL DEFAULT 0,
    mastery_level TEXT NOT NULL DEFAULT 'not_started',
    last_attempt_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_progress_lesson ON student_progress(lesson_id);

-- ============================================================================
-- TABLE: api_cache
-- ============================================================================
-- Fetch-through cache for best-effort enrichment API responses.

CREATE TABLE IF NOT EXISTS api_cache (
    cache_key TEXT PRIMARY KEY NOT NULL,
    payload TEXT NOT NULL,
    fetched_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- TABLE: standards
-- ============================================================================
-- Grade-level educational standard codes per subject (e.g. "3.OA.A.1").

CREATE TABLE IF NOT EXISTS standards (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    subject_id INTEGER NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
    grade_level INTEGER NOT NULL,
    code TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_standards_subject ON standards(subject_id, grade_level);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_applies_cleanly() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        // Verify version was recorded
        let version = get_current_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Apply twice - should not error
        apply_migrations(&conn).unwrap();
        apply_migrations(&conn).unwrap();

        let version = get_current_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_subject_name_unique() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        conn.execute("INSERT INTO subjects (name) VALUES ('Mathematics')", [])
            .unwrap();
        let duplicate = conn.execute("INSERT INTO subjects (name) VALUES ('Mathematics')", []);
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_foreign_keys_cascade() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        apply_migrations(&conn).unwrap();

        conn.execute("INSERT INTO subjects (name) VALUES ('Science')", [])
            .unwrap();
        conn.execute(
            "INSERT INTO topics (subject_id, name) VALUES (1, 'Astronomy')",
            [],
        )
        .unwrap();

        // Topic referencing a missing subject must be rejected
        let orphan = conn.execute(
            "INSERT INTO topics (subject_id, name) VALUES (99, 'Orphan')",
            [],
        );
        assert!(orphan.is_err());

        // Deleting the subject cascades to its topics
        conn.execute("DELETE FROM subjects WHERE id = 1", []).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM topics", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
