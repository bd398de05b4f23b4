//! Domain types for hornbook
//!
//! This crate defines the curriculum hierarchy (Subject → Topic → Lesson →
//! PracticeProblem), student progress tracking, and the supporting records
//! for worksheet uploads and educational standards. Every other crate in the
//! workspace depends on these types; none of them depend back on storage or
//! the CLI.
//!
//! The hierarchy is write-once: subjects, topics, lessons and problems are
//! inserted at seed or ingest time and only read afterwards. The single
//! mutable entity is [`StudentProgress`].

pub mod curriculum;
pub mod progress;
pub mod standard;
pub mod upload;

// Re-exports
pub use curriculum::{
    Difficulty, Example, Lesson, LessonDetail, LessonSource, NewLesson, NewPracticeProblem,
    NewSubject, NewTopic, PracticeProblem, Subject, Topic,
};
pub use progress::{MasteryLevel, ProgressSummary, StudentProgress};
pub use standard::{NewStandard, Standard};
pub use upload::{FileKind, NewUploadedFile, UploadedFile};
