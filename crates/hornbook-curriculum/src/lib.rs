//! # Hornbook Curriculum
//!
//! Builtin curriculum content and the seeder that loads it.
//!
//! Content lives in [`builtin`] as plain [`SubjectSpec`] trees covering
//! Mathematics, Science, and English Language Arts. [`builtin::starter`] is
//! the compact set; [`builtin::massive`] extends every subject with further
//! topics. [`standards::builtin`] carries grade-level standard codes seeded
//! alongside the full set.
//!
//! [`Seeder::seed`] is idempotent at subject granularity: a subject name
//! that already exists in the database skips that whole tree, so every seed
//! command can be re-run safely.

pub mod builtin;
pub mod seeder;
pub mod spec;
pub mod standards;

// Re-exports
pub use seeder::{SeedReport, Seeder, StandardsReport};
pub use spec::{LessonSpec, ProblemSpec, SubjectSpec, TopicSpec};
pub use standards::StandardSpec;
