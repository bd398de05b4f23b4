//! Curriculum hierarchy types
//!
//! Subject → Topic → Lesson → PracticeProblem, plus the `New*` parameter
//! structs used for inserts. Rows are identified by their SQLite rowid
//! (`i64`); the `New*` structs carry everything except the id.
//!
//! List-valued fields (`teaching_steps`, `examples`, `solution_steps`,
//! `hints`) are stored as JSON text columns, so all of these types derive
//! [`serde::Serialize`]/[`serde::Deserialize`].

use serde::{Deserialize, Serialize};

// ============================================================================
// Subjects and Topics
// ============================================================================

/// Root of the curriculum hierarchy (e.g. "Mathematics")
///
/// `name` is the only column in the schema with a UNIQUE constraint; the
/// seeder relies on it for idempotence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Emoji or short glyph shown next to the subject in listings
    pub icon: String,
    pub display_order: i64,
}

/// A teaching unit inside a subject (e.g. "Multiplication")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub subject_id: i64,
    pub name: String,
    pub description: String,
    pub display_order: i64,
}

/// Insert parameters for a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubject {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub display_order: i64,
}

impl NewSubject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            display_order: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn with_display_order(mut self, order: i64) -> Self {
        self.display_order = order;
        self
    }
}

/// Insert parameters for a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTopic {
    pub subject_id: i64,
    pub name: String,
    pub description: String,
    pub display_order: i64,
}

impl NewTopic {
    pub fn new(subject_id: i64, name: impl Into<String>) -> Self {
        Self {
            subject_id,
            name: name.into(),
            description: String::new(),
            display_order: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_display_order(mut self, order: i64) -> Self {
        self.display_order = order;
        self
    }
}

// ============================================================================
// Lessons
// ============================================================================

/// A worked example shown during a lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub title: String,
    pub content: String,
}

impl Example {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Where a lesson came from
///
/// Stored as TEXT; unknown values read back as [`LessonSource::Builtin`]
/// rather than failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonSource {
    /// Shipped with the builtin curriculum
    #[default]
    Builtin,
    /// Created by the worksheet ingestion pipeline
    Uploaded,
    /// Created from third-party API content
    Api,
}

impl LessonSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonSource::Builtin => "builtin",
            LessonSource::Uploaded => "uploaded",
            LessonSource::Api => "api",
        }
    }

    /// Parse a stored source string, falling back to `Builtin`
    pub fn parse(s: &str) -> Self {
        match s {
            "builtin" => LessonSource::Builtin,
            "uploaded" => LessonSource::Uploaded,
            "api" => LessonSource::Api,
            _ => LessonSource::Builtin,
        }
    }
}

/// A single lesson: prose plus step-by-step teaching content
///
/// Lessons are immutable once seeded. `teaching_steps` and `examples` are
/// JSON text columns in SQLite and round-trip through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub topic_id: i64,
    pub title: String,
    pub description: String,
    pub teaching_steps: Vec<String>,
    pub examples: Vec<Example>,
    pub source: LessonSource,
    pub display_order: i64,
}

/// A lesson joined with the names of its topic and subject
///
/// Reads that display a lesson always need the parent names, so the store
/// denormalizes them in one JOIN instead of issuing three queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDetail {
    pub lesson: Lesson,
    pub topic_name: String,
    pub subject_name: String,
}

/// Insert parameters for a lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLesson {
    pub topic_id: i64,
    pub title: String,
    pub description: String,
    pub teaching_steps: Vec<String>,
    pub examples: Vec<Example>,
    pub source: LessonSource,
    pub display_order: i64,
}

impl NewLesson {
    pub fn new(topic_id: i64, title: impl Into<String>) -> Self {
        Self {
            topic_id,
            title: title.into(),
            description: String::new(),
            teaching_steps: Vec::new(),
            examples: Vec::new(),
            source: LessonSource::Builtin,
            display_order: 0,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_teaching_steps(mut self, steps: Vec<String>) -> Self {
        self.teaching_steps = steps;
        self
    }

    #[must_use]
    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = examples;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: LessonSource) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_display_order(mut self, order: i64) -> Self {
        self.display_order = order;
        self
    }
}

// ============================================================================
// Practice problems
// ============================================================================

/// Problem difficulty, stored as TEXT
///
/// Unknown values read back as `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a stored difficulty string, falling back to `Medium`
    pub fn parse(s: &str) -> Self {
        match s {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

/// A practice problem attached to a lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeProblem {
    pub id: i64,
    pub lesson_id: i64,
    pub question: String,
    /// Canonical answer as display text (e.g. "42" or "7 remainder 2")
    pub answer: String,
    pub solution_steps: Vec<String>,
    pub hints: Vec<String>,
    pub difficulty: Difficulty,
    pub display_order: i64,
}

/// Insert parameters for a practice problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPracticeProblem {
    pub lesson_id: i64,
    pub question: String,
    pub answer: String,
    pub solution_steps: Vec<String>,
    pub hints: Vec<String>,
    pub difficulty: Difficulty,
    pub display_order: i64,
}

impl NewPracticeProblem {
    pub fn new(lesson_id: i64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            lesson_id,
            question: question.into(),
            answer: answer.into(),
            solution_steps: Vec::new(),
            hints: Vec::new(),
            difficulty: Difficulty::Medium,
            display_order: 0,
        }
    }

    #[must_use]
    pub fn with_solution_steps(mut self, steps: Vec<String>) -> Self {
        self.solution_steps = steps;
        self
    }

    #[must_use]
    pub fn with_hints(mut self, hints: Vec<String>) -> Self {
        self.hints = hints;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_display_order(mut self, order: i64) -> Self {
        self.display_order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_source_round_trip() {
        for source in [LessonSource::Builtin, LessonSource::Uploaded, LessonSource::Api] {
            assert_eq!(LessonSource::parse(source.as_str()), source);
        }
    }

    #[test]
    fn test_lesson_source_unknown_falls_back_to_builtin() {
        assert_eq!(LessonSource::parse("scanned"), LessonSource::Builtin);
        assert_eq!(LessonSource::parse(""), LessonSource::Builtin);
    }

    #[test]
    fn test_difficulty_round_trip() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::parse(difficulty.as_str()), difficulty);
        }
    }

    #[test]
    fn test_difficulty_unknown_falls_back_to_medium() {
        assert_eq!(Difficulty::parse("impossible"), Difficulty::Medium);
    }

    #[test]
    fn test_new_subject_builders() {
        let subject = NewSubject::new("Mathematics")
            .with_description("Numbers and operations")
            .with_icon("🔢")
            .with_display_order(1);

        assert_eq!(subject.name, "Mathematics");
        assert_eq!(subject.description, "Numbers and operations");
        assert_eq!(subject.icon, "🔢");
        assert_eq!(subject.display_order, 1);
    }

    #[test]
    fn test_new_lesson_defaults() {
        let lesson = NewLesson::new(7, "Adding within 20");

        assert_eq!(lesson.topic_id, 7);
        assert_eq!(lesson.title, "Adding within 20");
        assert!(lesson.teaching_steps.is_empty());
        assert!(lesson.examples.is_empty());
        assert_eq!(lesson.source, LessonSource::Builtin);
    }

    #[test]
    fn test_lesson_serialization_round_trip() {
        let lesson = Lesson {
            id: 3,
            topic_id: 1,
            title: "Long division".to_string(),
            description: "Dividing with remainders".to_string(),
            teaching_steps: vec![
                "Divide the first digit".to_string(),
                "Bring down the next digit".to_string(),
            ],
            examples: vec![Example::new("17 ÷ 5", "17 ÷ 5 = 3 remainder 2")],
            source: LessonSource::Builtin,
            display_order: 2,
        };

        let json = serde_json::to_string(&lesson).unwrap();
        let back: Lesson = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lesson);
    }

    #[test]
    fn test_new_practice_problem_builders() {
        let problem = NewPracticeProblem::new(4, "What is 6 x 7?", "42")
            .with_solution_steps(vec!["Multiply 6 by 7".to_string()])
            .with_hints(vec!["Skip-count by 6 seven times".to_string()])
            .with_difficulty(Difficulty::Easy);

        assert_eq!(problem.lesson_id, 4);
        assert_eq!(problem.answer, "42");
        assert_eq!(problem.difficulty, Difficulty::Easy);
        assert_eq!(problem.solution_steps.len(), 1);
    }
}
