//! Worksheet Ingestion Pipeline
//!
//! Straight-line flow from an uploaded file to a stored lesson:
//!
//! 1. **Extract**: pull raw text out of the file (plain text and markdown;
//!    other kinds downgrade to empty text with a warning)
//! 2. **Classify**: scan the text with the fixed pattern dictionary and
//!    compute answers for every arithmetic match
//! 3. **Synthesize**: pad to the minimum problem count with filler problems
//!    on the sheet's dominant operator
//! 4. **Insert**: one lesson plus its problems under the subject's
//!    "Worksheets" topic, and an upload audit row
//!
//! No retries, no backpressure, no state machine. Extraction failures are
//! non-fatal; anything that goes wrong after classification surfaces as an
//! [`IngestError`] from `ingest`.

use std::path::Path;
use std::sync::Arc;

use hornbook_core::{
    FileKind, LessonSource, NewLesson, NewPracticeProblem, NewTopic, NewUploadedFile,
};
use hornbook_sqlite::{CurriculumStore, SqlitePool, UploadStore};
use tracing::{debug, info, warn};

use crate::classify::{detect_subject, scan_problems, ArithmeticProblem};
use crate::error::{IngestError, IngestResult};
use crate::extract::{PlainTextExtractor, TextExtractor};
use crate::synthesize::{dominant_operation, pad_problems, MIN_PROBLEMS};

/// Topic that collects ingested lessons within a subject
const WORKSHEETS_TOPIC: &str = "Worksheets";

/// Pipeline tuning knobs
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Attach the lesson to this topic instead of a detected-subject
    /// "Worksheets" topic
    pub topic_id: Option<i64>,
    /// Minimum problems per ingested lesson; thin worksheets are padded up
    pub min_problems: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            topic_id: None,
            min_problems: MIN_PROBLEMS,
        }
    }
}

/// What one ingestion run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub lesson_id: i64,
    pub problems_found: usize,
    pub problems_synthesized: usize,
    pub kind: FileKind,
}

/// The worksheet pipeline orchestrator
///
/// Coordinates extraction, classification, synthesis and storage. The
/// extractor sits behind a trait object so tests (and an eventual
/// OCR-capable build) can substitute their own.
pub struct WorksheetPipeline {
    extractor: Arc<dyn TextExtractor>,
    curriculum: CurriculumStore,
    uploads: UploadStore,
    config: IngestConfig,
}

impl WorksheetPipeline {
    /// Build the default pipeline over a pool
    pub fn new(pool: SqlitePool, config: IngestConfig) -> Self {
        Self {
            extractor: Arc::new(PlainTextExtractor::new()),
            curriculum: CurriculumStore::new(pool.clone()),
            uploads: UploadStore::new(pool),
            config,
        }
    }

    /// Replace the text extractor
    #[must_use]
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Run the pipeline on one file
    pub fn ingest(&self, path: &Path) -> IngestResult<IngestReport> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("worksheet")
            .to_string();
        let kind = FileKind::from_path(path);
        info!(file = %filename, kind = kind.as_str(), "Ingesting worksheet");

        // Phase 1: extract. A file we cannot read the text out of still
        // produces a lesson; only a missing file is a hard error.
        let text = match self.extractor.extract(path) {
            Ok(text) => text,
            Err(IngestError::FileNotFound(missing)) => {
                return Err(IngestError::FileNotFound(missing))
            }
            Err(e) => {
                warn!(file = %filename, error = %e, "Extraction failed, continuing with empty text");
                String::new()
            }
        };

        // Phase 2: classify
        let mut problems = scan_problems(&text);
        let problems_found = problems.len();
        let subject_name = detect_subject(&text, &problems);
        debug!(problems_found, subject = subject_name, "Classified worksheet");

        // Phase 3: synthesize fillers
        let problems_synthesized = pad_problems(&mut problems, self.config.min_problems);

        // Phase 4: insert
        let topic_id = self.resolve_topic(subject_name)?;
        let lesson_id = self.insert_lesson(topic_id, &filename, &problems)?;

        self.uploads.record(
            &NewUploadedFile::new(&filename, kind)
                .with_lesson_id(lesson_id)
                .with_problems_created(problems.len() as i64),
        )?;

        info!(
            lesson_id,
            problems_found, problems_synthesized, "Worksheet ingested"
        );
        Ok(IngestReport {
            lesson_id,
            problems_found,
            problems_synthesized,
            kind,
        })
    }

    /// Pick the topic the lesson lands under
    ///
    /// An explicit override must exist; otherwise the detected subject's
    /// "Worksheets" topic is found or created. The subject itself must have
    /// been seeded.
    fn resolve_topic(&self, subject_name: &str) -> IngestResult<i64> {
        if let Some(topic_id) = self.config.topic_id {
            return match self.curriculum.get_topic(topic_id)? {
                Some(topic) => Ok(topic.id),
                None => Err(IngestError::UnknownTopic(topic_id)),
            };
        }

        let subject = self
            .curriculum
            .get_subject_by_name(subject_name)?
            .ok_or_else(|| IngestError::MissingSubject(subject_name.to_string()))?;

        if let Some(topic) = self
            .curriculum
            .get_topic_by_name(subject.id, WORKSHEETS_TOPIC)?
        {
            return Ok(topic.id);
        }

        debug!(subject = %subject.name, "Creating Worksheets topic");
        let topic_id = self.curriculum.add_topic(
            &NewTopic::new(subject.id, WORKSHEETS_TOPIC)
                .with_description("Lessons generated from uploaded worksheets")
                .with_display_order(99),
        )?;
        Ok(topic_id)
    }

    /// Template-fill one lesson and its problems
    fn insert_lesson(
        &self,
        topic_id: i64,
        filename: &str,
        problems: &[ArithmeticProblem],
    ) -> IngestResult<i64> {
        let op = dominant_operation(problems);

        let lesson_id = self.curriculum.add_lesson(
            &NewLesson::new(topic_id, format!("Worksheet: {}", filename))
                .with_description(format!("Practice problems imported from {}", filename))
                .with_teaching_steps(op.teaching_steps())
                .with_source(LessonSource::Uploaded),
        )?;

        for (order, problem) in problems.iter().enumerate() {
            self.curriculum.add_practice_problem(
                &NewPracticeProblem::new(lesson_id, problem.question(), problem.answer())
                    .with_solution_steps(problem.solution_steps())
                    .with_hints(problem.hints())
                    .with_difficulty(problem.difficulty())
                    .with_display_order(order as i64),
            )?;
        }

        Ok(lesson_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hornbook_core::NewSubject;
    use std::fs::write;
    use tempfile::TempDir;

    fn pipeline_with_subjects(subjects: &[&str]) -> (WorksheetPipeline, SqlitePool) {
        let pool = SqlitePool::memory().unwrap();
        let curriculum = CurriculumStore::new(pool.clone());
        for name in subjects {
            curriculum.add_subject(&NewSubject::new(*name)).unwrap();
        }
        (
            WorksheetPipeline::new(pool.clone(), IngestConfig::default()),
            pool,
        )
    }

    #[test]
    fn test_ingest_math_worksheet() {
        let tmp = TempDir::new().unwrap();
        let sheet = tmp.path().join("arithmetic.txt");
        write(&sheet, "1) 12 + 7 =\n2) 20 - 8 =\n3) 6 x 7 =\n4) 35 ÷ 5 =\n").unwrap();

        let (pipeline, pool) = pipeline_with_subjects(&["Mathematics"]);
        let report = pipeline.ingest(&sheet).unwrap();

        assert_eq!(report.problems_found, 4);
        assert_eq!(report.problems_synthesized, 6);
        assert_eq!(report.kind, FileKind::Text);

        let curriculum = CurriculumStore::new(pool.clone());
        let detail = curriculum.get_lesson(report.lesson_id).unwrap().unwrap();
        assert_eq!(detail.subject_name, "Mathematics");
        assert_eq!(detail.topic_name, "Worksheets");
        assert_eq!(detail.lesson.source, LessonSource::Uploaded);
        assert!(!detail.lesson.teaching_steps.is_empty());

        let problems = curriculum
            .get_problems_for_lesson(report.lesson_id)
            .unwrap();
        assert_eq!(problems.len(), 10);
        assert_eq!(problems[0].question, "What is 12 + 7?");
        assert_eq!(problems[0].answer, "19");

        let uploads = UploadStore::new(pool).list().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].lesson_id, Some(report.lesson_id));
        assert_eq!(uploads[0].problems_created, 10);
    }

    #[test]
    fn test_ingest_unsupported_kind_synthesizes_everything() {
        let tmp = TempDir::new().unwrap();
        let scan = tmp.path().join("scan.pdf");
        write(&scan, b"%PDF-1.4 not really parseable").unwrap();

        let (pipeline, _pool) = pipeline_with_subjects(&["Mathematics"]);
        let report = pipeline.ingest(&scan).unwrap();

        assert_eq!(report.problems_found, 0);
        assert_eq!(report.problems_synthesized, 10);
        assert_eq!(report.kind, FileKind::Pdf);
    }

    #[test]
    fn test_ingest_missing_file_is_fatal() {
        let (pipeline, _pool) = pipeline_with_subjects(&["Mathematics"]);
        let result = pipeline.ingest(Path::new("/nonexistent/sheet.txt"));
        assert!(matches!(result, Err(IngestError::FileNotFound(_))));
    }

    #[test]
    fn test_ingest_without_seeded_subject_fails() {
        let tmp = TempDir::new().unwrap();
        let sheet = tmp.path().join("sums.txt");
        write(&sheet, "2 + 2 =").unwrap();

        let (pipeline, _pool) = pipeline_with_subjects(&[]);
        let result = pipeline.ingest(&sheet);
        assert!(matches!(result, Err(IngestError::MissingSubject(_))));
    }

    #[test]
    fn test_ingest_reuses_worksheets_topic() {
        let tmp = TempDir::new().unwrap();
        let first = tmp.path().join("first.txt");
        let second = tmp.path().join("second.txt");
        write(&first, "2 + 2 =").unwrap();
        write(&second, "3 + 3 =").unwrap();

        let (pipeline, pool) = pipeline_with_subjects(&["Mathematics"]);
        pipeline.ingest(&first).unwrap();
        pipeline.ingest(&second).unwrap();

        let curriculum = CurriculumStore::new(pool);
        let subject = curriculum
            .get_subject_by_name("Mathematics")
            .unwrap()
            .unwrap();
        let topics = curriculum.get_topics_for_subject(subject.id).unwrap();
        assert_eq!(topics.len(), 1);

        let lessons = curriculum.get_lessons_for_topic(topics[0].id).unwrap();
        assert_eq!(lessons.len(), 2);
    }

    #[test]
    fn test_ingest_with_topic_override() {
        let tmp = TempDir::new().unwrap();
        let sheet = tmp.path().join("sums.txt");
        write(&sheet, "2 + 2 =").unwrap();

        let pool = SqlitePool::memory().unwrap();
        let curriculum = CurriculumStore::new(pool.clone());
        let subject_id = curriculum
            .add_subject(&NewSubject::new("Mathematics"))
            .unwrap();
        let topic_id = curriculum
            .add_topic(&hornbook_core::NewTopic::new(subject_id, "Addition"))
            .unwrap();

        let config = IngestConfig {
            topic_id: Some(topic_id),
            ..IngestConfig::default()
        };
        let report = WorksheetPipeline::new(pool.clone(), config)
            .ingest(&sheet)
            .unwrap();

        let detail = curriculum.get_lesson(report.lesson_id).unwrap().unwrap();
        assert_eq!(detail.topic_name, "Addition");
        // No Worksheets topic was created
        assert_eq!(
            curriculum.get_topics_for_subject(subject_id).unwrap().len(),
            1
        );
    }

    #[test]
    fn test_ingest_with_unknown_topic_override_fails() {
        let tmp = TempDir::new().unwrap();
        let sheet = tmp.path().join("sums.txt");
        write(&sheet, "2 + 2 =").unwrap();

        let pool = SqlitePool::memory().unwrap();
        let config = IngestConfig {
            topic_id: Some(777),
            ..IngestConfig::default()
        };
        let result = WorksheetPipeline::new(pool, config).ingest(&sheet);
        assert!(matches!(result, Err(IngestError::UnknownTopic(777))));
    }

    #[test]
    fn test_ingest_blank_worksheet_files_under_language_arts() {
        let tmp = TempDir::new().unwrap();
        let sheet = tmp.path().join("fill_in.txt");
        write(&sheet, "The cat ___ on the mat.\nShe ___ to school.\n").unwrap();

        let (pipeline, pool) = pipeline_with_subjects(&["Mathematics", "English Language Arts"]);
        let report = pipeline.ingest(&sheet).unwrap();

        assert_eq!(report.problems_found, 0);

        let curriculum = CurriculumStore::new(pool);
        let detail = curriculum.get_lesson(report.lesson_id).unwrap().unwrap();
        assert_eq!(detail.subject_name, "English Language Arts");
        assert_eq!(detail.topic_name, "Worksheets");
    }
}
