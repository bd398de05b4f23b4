//! Curriculum storage: subjects, topics, lessons and practice problems
//!
//! Writes serialize the list-valued lesson/problem fields to JSON text;
//! reads parse them back and fall back leniently on the enum columns so a
//! hand-edited database never poisons a whole listing.

use crate::connection::SqlitePool;
use crate::error::SqliteResult;
use crate::store::json_column;
use hornbook_core::{
    Difficulty, Lesson, LessonDetail, LessonSource, NewLesson, NewPracticeProblem, NewSubject,
    NewTopic, PracticeProblem, Subject, Topic,
};
use rusqlite::{params, OptionalExtension};
use tracing::debug;

/// Row counts across the four curriculum tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableCounts {
    pub subjects: i64,
    pub topics: i64,
    pub lessons: i64,
    pub problems: i64,
}

/// Per-subject content totals, for database health reporting
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectBreakdown {
    pub subject_name: String,
    pub icon: String,
    pub topic_count: i64,
    pub lesson_count: i64,
    pub problem_count: i64,
}

/// SQLite storage for the curriculum hierarchy
#[derive(Clone)]
pub struct CurriculumStore {
    pool: SqlitePool,
}

impl CurriculumStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ========================================================================
    // Subjects
    // ========================================================================

    /// Insert a subject and return its id
    pub fn add_subject(&self, subject: &NewSubject) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            conn.execute(
                "INSERT INTO subjects (name, description, icon, display_order)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    subject.name,
                    subject.description,
                    subject.icon,
                    subject.display_order,
                ],
            )?;
            let id = conn.last_insert_rowid();
            debug!(id, name = %subject.name, "Inserted subject");
            Ok(id)
        })
    }

    /// All subjects in display order
    pub fn get_all_subjects(&self) -> SqliteResult<Vec<Subject>> {
        self.pool.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, description, icon, display_order
                 FROM subjects
                 ORDER BY display_order, name",
            )?;
            let subjects = stmt
                .query_map([], row_to_subject)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(subjects)
        })
    }

    /// Look a subject up by its unique name
    pub fn get_subject_by_name(&self, name: &str) -> SqliteResult<Option<Subject>> {
        self.pool.with_connection(|conn| {
            let subject = conn
                .query_row(
                    "SELECT id, name, description, icon, display_order
                     FROM subjects
                     WHERE name = ?1",
                    [name],
                    row_to_subject,
                )
                .optional()?;
            Ok(subject)
        })
    }

    // ========================================================================
    // Topics
    // ========================================================================

    /// Insert a topic and return its id
    pub fn add_topic(&self, topic: &NewTopic) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            conn.execute(
                "INSERT INTO topics (subject_id, name, description, display_order)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    topic.subject_id,
                    topic.name,
                    topic.description,
                    topic.display_order,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Fetch a topic by id
    pub fn get_topic(&self, id: i64) -> SqliteResult<Option<Topic>> {
        self.pool.with_connection(|conn| {
            let topic = conn
                .query_row(
                    "SELECT id, subject_id, name, description, display_order
                     FROM topics
                     WHERE id = ?1",
                    [id],
                    row_to_topic,
                )
                .optional()?;
            Ok(topic)
        })
    }

    /// Topics under a subject, in display order
    pub fn get_topics_for_subject(&self, subject_id: i64) -> SqliteResult<Vec<Topic>> {
        self.pool.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, subject_id, name, description, display_order
                 FROM topics
                 WHERE subject_id = ?1
                 ORDER BY display_order, name",
            )?;
            let topics = stmt
                .query_map([subject_id], row_to_topic)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(topics)
        })
    }

    /// Find a topic by name within a subject
    ///
    /// The ingestion pipeline uses this to reuse its "Worksheets" topic
    /// across runs instead of creating one per file.
    pub fn get_topic_by_name(&self, subject_id: i64, name: &str) -> SqliteResult<Option<Topic>> {
        self.pool.with_connection(|conn| {
            let topic = conn
                .query_row(
                    "SELECT id, subject_id, name, description, display_order
                     FROM topics
                     WHERE subject_id = ?1 AND name = ?2",
                    params![subject_id, name],
                    row_to_topic,
                )
                .optional()?;
            Ok(topic)
        })
    }

    // ========================================================================
    // Lessons
    // ========================================================================

    /// Insert a lesson and return its id
    pub fn add_lesson(&self, lesson: &NewLesson) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            let steps_json = serde_json::to_string(&lesson.teaching_steps)?;
            let examples_json = serde_json::to_string(&lesson.examples)?;

            conn.execute(
                "INSERT INTO lessons
                     (topic_id, title, description, teaching_steps, examples,
                      source_type, display_order)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    lesson.topic_id,
                    lesson.title,
                    lesson.description,
                    steps_json,
                    examples_json,
                    lesson.source.as_str(),
                    lesson.display_order,
                ],
            )?;
            let id = conn.last_insert_rowid();
            debug!(id, title = %lesson.title, "Inserted lesson");
            Ok(id)
        })
    }

    /// Fetch a lesson with its topic and subject names joined in
    pub fn get_lesson(&self, id: i64) -> SqliteResult<Option<LessonDetail>> {
        self.pool.with_connection(|conn| {
            let detail = conn
                .query_row(
                    "SELECT l.id, l.topic_id, l.title, l.description,
                            l.teaching_steps, l.examples, l.source_type,
                            l.display_order, t.name, s.name
                     FROM lessons l
                     JOIN topics t ON t.id = l.topic_id
                     JOIN subjects s ON s.id = t.subject_id
                     WHERE l.id = ?1",
                    [id],
                    |row| {
                        let lesson = row_to_lesson(row)?;
                        Ok(LessonDetail {
                            lesson,
                            topic_name: row.get(8)?,
                            subject_name: row.get(9)?,
                        })
                    },
                )
                .optional()?;
            Ok(detail)
        })
    }

    /// Lessons under a topic, in display order
    pub fn get_lessons_for_topic(&self, topic_id: i64) -> SqliteResult<Vec<Lesson>> {
        self.pool.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, topic_id, title, description, teaching_steps,
                        examples, source_type, display_order
                 FROM lessons
                 WHERE topic_id = ?1
                 ORDER BY display_order, title",
            )?;
            let lessons = stmt
                .query_map([topic_id], row_to_lesson)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(lessons)
        })
    }

    // ========================================================================
    // Practice problems
    // ========================================================================

    /// Insert a practice problem and return its id
    pub fn add_practice_problem(&self, problem: &NewPracticeProblem) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            let steps_json = serde_json::to_string(&problem.solution_steps)?;
            let hints_json = serde_json::to_string(&problem.hints)?;

            conn.execute(
                "INSERT INTO practice_problems
                     (lesson_id, question, answer, solution_steps, hints,
                      difficulty, display_order)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    problem.lesson_id,
                    problem.question,
                    problem.answer,
                    steps_json,
                    hints_json,
                    problem.difficulty.as_str(),
                    problem.display_order,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Problems attached to a lesson, in display order
    pub fn get_problems_for_lesson(&self, lesson_id: i64) -> SqliteResult<Vec<PracticeProblem>> {
        self.pool.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, lesson_id, question, answer, solution_steps,
                        hints, difficulty, display_order
                 FROM practice_problems
                 WHERE lesson_id = ?1
                 ORDER BY display_order, id",
            )?;
            let problems = stmt
                .query_map([lesson_id], row_to_problem)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(problems)
        })
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Row counts for every curriculum table, in one query
    pub fn counts(&self) -> SqliteResult<TableCounts> {
        self.pool.with_connection(|conn| {
            let counts = conn.query_row(
                "SELECT
                     (SELECT COUNT(*) FROM subjects),
                     (SELECT COUNT(*) FROM topics),
                     (SELECT COUNT(*) FROM lessons),
                     (SELECT COUNT(*) FROM practice_problems)",
                [],
                |row| {
                    Ok(TableCounts {
                        subjects: row.get(0)?,
                        topics: row.get(1)?,
                        lessons: row.get(2)?,
                        problems: row.get(3)?,
                    })
                },
            )?;
            Ok(counts)
        })
    }

    /// Content totals grouped by subject
    ///
    /// LEFT JOINs so a freshly added subject with no topics still shows up
    /// with zero counts.
    pub fn subject_breakdown(&self) -> SqliteResult<Vec<SubjectBreakdown>> {
        self.pool.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT s.name, s.icon,
                        COUNT(DISTINCT t.id),
                        COUNT(DISTINCT l.id),
                        COUNT(DISTINCT p.id)
                 FROM subjects s
                 LEFT JOIN topics t ON t.subject_id = s.id
                 LEFT JOIN lessons l ON l.topic_id = t.id
                 LEFT JOIN practice_problems p ON p.lesson_id = l.id
                 GROUP BY s.id
                 ORDER BY s.display_order, s.name",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(SubjectBreakdown {
                        subject_name: row.get(0)?,
                        icon: row.get(1)?,
                        topic_count: row.get(2)?,
                        lesson_count: row.get(3)?,
                        problem_count: row.get(4)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }
}

fn row_to_subject(row: &rusqlite::Row) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        icon: row.get(3)?,
        display_order: row.get(4)?,
    })
}

fn row_to_topic(row: &rusqlite::Row) -> rusqlite::Result<Topic> {
    Ok(Topic {
        id: row.get(0)?,
        subject_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        display_order: row.get(4)?,
    })
}

fn row_to_lesson(row: &rusqlite::Row) -> rusqlite::Result<Lesson> {
    let steps_raw: String = row.get(4)?;
    let examples_raw: String = row.get(5)?;
    let source_raw: String = row.get(6)?;

    Ok(Lesson {
        id: row.get(0)?,
        topic_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        teaching_steps: json_column(4, &steps_raw)?,
        examples: json_column(5, &examples_raw)?,
        source: LessonSource::parse(&source_raw),
        display_order: row.get(7)?,
    })
}

fn row_to_problem(row: &rusqlite::Row) -> rusqlite::Result<PracticeProblem> {
    let steps_raw: String = row.get(4)?;
    let hints_raw: String = row.get(5)?;
    let difficulty_raw: String = row.get(6)?;

    Ok(PracticeProblem {
        id: row.get(0)?,
        lesson_id: row.get(1)?,
        question: row.get(2)?,
        answer: row.get(3)?,
        solution_steps: json_column(4, &steps_raw)?,
        hints: json_column(5, &hints_raw)?,
        difficulty: Difficulty::parse(&difficulty_raw),
        display_order: row.get(7)?,
    })
}
