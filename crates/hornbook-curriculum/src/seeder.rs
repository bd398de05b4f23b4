//! Idempotent curriculum seeding
//!
//! The database enforces uniqueness only on `subjects.name`; everything else
//! relies on the seeder's existence check. Before inserting a subject the
//! seeder asks [`CurriculumStore::get_subject_by_name`]; a hit skips that
//! whole subject tree, so re-running any seed command never duplicates rows
//! and never partially re-seeds an existing subject.

use hornbook_core::{LessonSource, NewLesson, NewPracticeProblem, NewStandard, NewSubject, NewTopic};
use hornbook_sqlite::{CurriculumStore, SqlitePool, SqliteResult, StandardStore};
use tracing::{info, warn};

use crate::spec::SubjectSpec;
use crate::standards::StandardSpec;

/// What a seeding run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub subjects_inserted: usize,
    pub subjects_skipped: usize,
    pub topics_inserted: usize,
    pub lessons_inserted: usize,
    pub problems_inserted: usize,
}

/// What a standards run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardsReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Writes builtin curriculum trees into the store
pub struct Seeder {
    curriculum: CurriculumStore,
    standards: StandardStore,
}

impl Seeder {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            curriculum: CurriculumStore::new(pool.clone()),
            standards: StandardStore::new(pool),
        }
    }

    /// Seed every subject tree not already present
    ///
    /// Subjects whose name already exists are skipped wholesale.
    pub fn seed(&self, subjects: &[SubjectSpec]) -> SqliteResult<SeedReport> {
        let mut report = SeedReport::default();

        for (order, spec) in subjects.iter().enumerate() {
            if self.curriculum.get_subject_by_name(&spec.name)?.is_some() {
                info!(subject = %spec.name, "Subject already present, skipping");
                report.subjects_skipped += 1;
                continue;
            }

            self.seed_subject(spec, order as i64, &mut report)?;
        }

        Ok(report)
    }

    fn seed_subject(
        &self,
        spec: &SubjectSpec,
        order: i64,
        report: &mut SeedReport,
    ) -> SqliteResult<()> {
        let subject_id = self.curriculum.add_subject(
            &NewSubject::new(&spec.name)
                .with_description(&spec.description)
                .with_icon(&spec.icon)
                .with_display_order(order),
        )?;
        report.subjects_inserted += 1;

        for (topic_order, topic) in spec.topics.iter().enumerate() {
            let topic_id = self.curriculum.add_topic(
                &NewTopic::new(subject_id, &topic.name)
                    .with_description(&topic.description)
                    .with_display_order(topic_order as i64),
            )?;
            report.topics_inserted += 1;

            for (lesson_order, lesson) in topic.lessons.iter().enumerate() {
                let lesson_id = self.curriculum.add_lesson(
                    &NewLesson::new(topic_id, &lesson.title)
                        .with_description(&lesson.description)
                        .with_teaching_steps(lesson.teaching_steps.clone())
                        .with_examples(lesson.examples.clone())
                        .with_source(LessonSource::Builtin)
                        .with_display_order(lesson_order as i64),
                )?;
                report.lessons_inserted += 1;

                for (problem_order, problem) in lesson.problems.iter().enumerate() {
                    self.curriculum.add_practice_problem(
                        &NewPracticeProblem::new(lesson_id, &problem.question, &problem.answer)
                            .with_solution_steps(problem.solution_steps.clone())
                            .with_hints(problem.hints.clone())
                            .with_difficulty(problem.difficulty)
                            .with_display_order(problem_order as i64),
                    )?;
                    report.problems_inserted += 1;
                }
            }
        }

        info!(
            subject = %spec.name,
            topics = spec.topics.len(),
            lessons = spec.lesson_count(),
            problems = spec.problem_count(),
            "Seeded subject"
        );

        Ok(())
    }

    /// Attach standard codes to their subjects, skipping codes already present
    ///
    /// Standards whose subject has not been seeded are skipped with a warning.
    pub fn seed_standards(&self, specs: &[StandardSpec]) -> SqliteResult<StandardsReport> {
        let mut report = StandardsReport::default();

        for spec in specs {
            let Some(subject) = self.curriculum.get_subject_by_name(spec.subject)? else {
                warn!(
                    subject = spec.subject,
                    code = spec.code,
                    "Subject not seeded, standard skipped"
                );
                report.skipped += 1;
                continue;
            };

            let existing = self.standards.list_for_subject(subject.id)?;
            if existing.iter().any(|s| s.code == spec.code) {
                report.skipped += 1;
                continue;
            }

            self.standards.add(&NewStandard::new(
                subject.id,
                spec.grade_level,
                spec.code,
                spec.description,
            ))?;
            report.inserted += 1;
        }

        info!(
            inserted = report.inserted,
            skipped = report.skipped,
            "Seeded standards"
        );

        Ok(report)
    }
}
