//! Student progress storage
//!
//! Attempts accumulate into one row per (lesson, problem) pair; mastery is
//! re-derived from the stored numbers on every write, so a stored level can
//! never drift from its attempts/score.

use crate::connection::SqlitePool;
use crate::error::{SqliteError, SqliteResult};
use crate::store::parse_timestamp;
use chrono::Utc;
use hornbook_core::{MasteryLevel, ProgressSummary, StudentProgress};
use rusqlite::{params, OptionalExtension};
use tracing::debug;

/// A progress row joined with its lesson title, for display
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    pub progress: StudentProgress,
    pub lesson_title: String,
}

/// SQLite storage for student progress
#[derive(Clone)]
pub struct ProgressStore {
    pool: SqlitePool,
}

impl ProgressStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record one attempt and return the updated row
    ///
    /// `problem_id` of `None` records against the lesson as a whole. The
    /// lesson (and problem, when given) must exist; a correct attempt adds
    /// 1.0 to the score, an incorrect one 0.0.
    pub fn record_attempt(
        &self,
        lesson_id: i64,
        problem_id: Option<i64>,
        correct: bool,
    ) -> SqliteResult<StudentProgress> {
        self.pool.with_connection(|conn| {
            let lesson_exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM lessons WHERE id = ?1)",
                [lesson_id],
                |row| row.get(0),
            )?;
            if !lesson_exists {
                return Err(SqliteError::NotFound(format!(
                    "Lesson {} does not exist",
                    lesson_id
                )));
            }

            if let Some(pid) = problem_id {
                let problem_exists: bool = conn.query_row(
                    "SELECT EXISTS(
                         SELECT 1 FROM practice_problems WHERE id = ?1 AND lesson_id = ?2
                     )",
                    params![pid, lesson_id],
                    |row| row.get(0),
                )?;
                if !problem_exists {
                    return Err(SqliteError::NotFound(format!(
                        "Problem {} does not exist in lesson {}",
                        pid, lesson_id
                    )));
                }
            }

            let points = if correct { 1.0 } else { 0.0 };
            let now = Utc::now().to_rfc3339();

            // NULL problem_ids are distinct under UNIQUE indexes, so the
            // lesson-level row is matched with IS instead of ON CONFLICT.
            let existing: Option<(i64, i64, f64)> = conn
                .query_row(
                    "SELECT id, attempts, score FROM student_progress
                     WHERE lesson_id = ?1 AND problem_id IS ?2",
                    params![lesson_id, problem_id],
                    |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
                )
                .optional()?;

            let row_id = match existing {
                Some((id, attempts, score)) => {
                    let attempts = attempts + 1;
                    let score = score + points;
                    let mastery = MasteryLevel::derive(attempts, score);
                    conn.execute(
                        "UPDATE student_progress
                         SET attempts = ?2, score = ?3, mastery_level = ?4,
                             last_attempt_at = ?5
                         WHERE id = ?1",
                        params![id, attempts, score, mastery.as_str(), now],
                    )?;
                    id
                }
                None => {
                    let mastery = MasteryLevel::derive(1, points);
                    conn.execute(
                        "INSERT INTO student_progress
                             (lesson_id, problem_id, attempts, score,
                              mastery_level, last_attempt_at)
                         VALUES (?1, ?2, 1, ?3, ?4, ?5)",
                        params![lesson_id, problem_id, points, mastery.as_str(), now],
                    )?;
                    conn.last_insert_rowid()
                }
            };

            let progress = conn.query_row(
                "SELECT id, lesson_id, problem_id, attempts, score,
                        mastery_level, last_attempt_at
                 FROM student_progress
                 WHERE id = ?1",
                [row_id],
                row_to_progress,
            )?;
            debug!(
                lesson_id,
                ?problem_id,
                attempts = progress.attempts,
                mastery = progress.mastery.as_str(),
                "Recorded attempt"
            );
            Ok(progress)
        })
    }

    /// All progress rows for one lesson (lesson-level row first)
    pub fn progress_for_lesson(&self, lesson_id: i64) -> SqliteResult<Vec<StudentProgress>> {
        self.pool.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, lesson_id, problem_id, attempts, score,
                        mastery_level, last_attempt_at
                 FROM student_progress
                 WHERE lesson_id = ?1
                 ORDER BY problem_id IS NOT NULL, problem_id",
            )?;
            let rows = stmt
                .query_map([lesson_id], row_to_progress)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Every progress row with its lesson title, most recent first
    pub fn list(&self) -> SqliteResult<Vec<ProgressEntry>> {
        self.pool.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT p.id, p.lesson_id, p.problem_id, p.attempts, p.score,
                        p.mastery_level, p.last_attempt_at, l.title
                 FROM student_progress p
                 JOIN lessons l ON l.id = p.lesson_id
                 ORDER BY p.last_attempt_at DESC, p.id DESC",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(ProgressEntry {
                        progress: row_to_progress(row)?,
                        lesson_title: row.get(7)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Number of progress rows, lesson-level and problem-level together
    pub fn count(&self) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            let count =
                conn.query_row("SELECT COUNT(*) FROM student_progress", [], |row| row.get(0))?;
            Ok(count)
        })
    }

    /// Aggregate progress over the whole database
    ///
    /// Lesson-level figures count rows with a NULL problem_id; problem-level
    /// figures count the rest. The mastered counts filter the same row sets,
    /// which keeps the summary internally consistent.
    pub fn overall(&self) -> SqliteResult<ProgressSummary> {
        self.pool.with_connection(|conn| {
            let summary = conn.query_row(
                "SELECT
                     (SELECT COUNT(*) FROM lessons),
                     (SELECT COUNT(DISTINCT lesson_id) FROM student_progress),
                     (SELECT COUNT(*) FROM student_progress
                      WHERE problem_id IS NULL AND mastery_level = 'mastered'),
                     (SELECT COUNT(*) FROM student_progress
                      WHERE problem_id IS NOT NULL),
                     (SELECT COUNT(*) FROM student_progress
                      WHERE problem_id IS NOT NULL AND mastery_level = 'mastered')",
                [],
                |row| {
                    Ok(ProgressSummary {
                        total_lessons: row.get(0)?,
                        lessons_started: row.get(1)?,
                        lessons_mastered: row.get(2)?,
                        total_problems_attempted: row.get(3)?,
                        problems_mastered: row.get(4)?,
                    })
                },
            )?;
            Ok(summary)
        })
    }
}

fn row_to_progress(row: &rusqlite::Row) -> rusqlite::Result<StudentProgress> {
    let mastery_raw: String = row.get(5)?;
    let timestamp_raw: String = row.get(6)?;

    Ok(StudentProgress {
        id: row.get(0)?,
        lesson_id: row.get(1)?,
        problem_id: row.get(2)?,
        attempts: row.get(3)?,
        score: row.get(4)?,
        mastery: MasteryLevel::parse(&mastery_raw),
        last_attempt_at: parse_timestamp(&timestamp_raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::curriculum::CurriculumStore;
    use hornbook_core::{NewLesson, NewPracticeProblem, NewSubject, NewTopic};

    /// Seed subject → topic → lesson → problem, returning (lesson, problem) ids
    fn fixture() -> (ProgressStore, i64, i64) {
        let pool = SqlitePool::memory().unwrap();
        let curriculum = CurriculumStore::new(pool.clone());

        let subject_id = curriculum
            .add_subject(&NewSubject::new("Mathematics"))
            .unwrap();
        let topic_id = curriculum
            .add_topic(&NewTopic::new(subject_id, "Addition"))
            .unwrap();
        let lesson_id = curriculum
            .add_lesson(&NewLesson::new(topic_id, "Adding within 20"))
            .unwrap();
        let problem_id = curriculum
            .add_practice_problem(&NewPracticeProblem::new(lesson_id, "What is 2 + 2?", "4"))
            .unwrap();

        (ProgressStore::new(pool), lesson_id, problem_id)
    }

    #[test]
    fn test_record_attempt_creates_then_updates() {
        let (store, lesson_id, _) = fixture();

        let first = store.record_attempt(lesson_id, None, true).unwrap();
        assert_eq!(first.attempts, 1);
        assert_eq!(first.score, 1.0);
        assert_eq!(first.mastery, MasteryLevel::Learning);

        let second = store.record_attempt(lesson_id, None, false).unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.attempts, 2);
        assert_eq!(second.score, 1.0);
        assert_eq!(second.mastery, MasteryLevel::Learning);

        let third = store.record_attempt(lesson_id, None, true).unwrap();
        assert_eq!(third.attempts, 3);
        // 2/3 is below the 0.8 mastery bar
        assert_eq!(third.mastery, MasteryLevel::Practicing);
    }

    #[test]
    fn test_three_correct_attempts_reach_mastery() {
        let (store, lesson_id, problem_id) = fixture();

        store
            .record_attempt(lesson_id, Some(problem_id), true)
            .unwrap();
        store
            .record_attempt(lesson_id, Some(problem_id), true)
            .unwrap();
        let third = store
            .record_attempt(lesson_id, Some(problem_id), true)
            .unwrap();

        assert_eq!(third.attempts, 3);
        assert_eq!(third.mastery, MasteryLevel::Mastered);
        assert!((third.success_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lesson_and_problem_rows_stay_distinct() {
        let (store, lesson_id, problem_id) = fixture();

        store.record_attempt(lesson_id, None, true).unwrap();
        store
            .record_attempt(lesson_id, Some(problem_id), false)
            .unwrap();
        // A second lesson-level attempt must update the NULL row, not add one
        store.record_attempt(lesson_id, None, true).unwrap();

        let rows = store.progress_for_lesson(lesson_id).unwrap();
        assert_eq!(rows.len(), 2);

        let lesson_row = rows.iter().find(|r| r.problem_id.is_none()).unwrap();
        assert_eq!(lesson_row.attempts, 2);
        let problem_row = rows.iter().find(|r| r.problem_id.is_some()).unwrap();
        assert_eq!(problem_row.attempts, 1);
    }

    #[test]
    fn test_record_attempt_unknown_lesson_fails() {
        let (store, _, _) = fixture();

        let result = store.record_attempt(9999, None, true);
        assert!(matches!(result, Err(SqliteError::NotFound(_))));
    }

    #[test]
    fn test_record_attempt_unknown_problem_fails() {
        let (store, lesson_id, _) = fixture();

        let result = store.record_attempt(lesson_id, Some(9999), true);
        assert!(matches!(result, Err(SqliteError::NotFound(_))));
    }

    #[test]
    fn test_list_includes_lesson_titles() {
        let (store, lesson_id, problem_id) = fixture();

        store.record_attempt(lesson_id, None, true).unwrap();
        store
            .record_attempt(lesson_id, Some(problem_id), true)
            .unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .all(|e| e.lesson_title == "Adding within 20"));
    }

    #[test]
    fn test_overall_summary() {
        let (store, lesson_id, problem_id) = fixture();

        let empty = store.overall().unwrap();
        assert_eq!(empty.total_lessons, 1);
        assert_eq!(empty.lessons_started, 0);
        assert_eq!(empty.total_problems_attempted, 0);

        for _ in 0..3 {
            store.record_attempt(lesson_id, None, true).unwrap();
            store
                .record_attempt(lesson_id, Some(problem_id), false)
                .unwrap();
        }

        let summary = store.overall().unwrap();
        assert_eq!(summary.lessons_started, 1);
        assert_eq!(summary.lessons_mastered, 1);
        assert_eq!(summary.total_problems_attempted, 1);
        assert_eq!(summary.problems_mastered, 0);
        assert!(summary.lessons_started <= summary.total_lessons);
        assert!(summary.problems_mastered <= summary.total_problems_attempted);
    }
}
