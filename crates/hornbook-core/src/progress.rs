//! Student progress tracking
//!
//! The only mutable entity in the data model. Each row tracks attempts on a
//! lesson (or a single problem within it); mastery is derived from the
//! accumulated numbers on every write, never accepted from input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mastery ladder for a lesson or problem
///
/// Stored as TEXT; unknown values read back as `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryLevel {
    #[default]
    NotStarted,
    Learning,
    Practicing,
    Mastered,
}

impl MasteryLevel {
    /// Derive mastery from accumulated attempts and score
    ///
    /// `score` is the sum of per-attempt points (1.0 for correct, 0.0 for
    /// incorrect), so `score / attempts` is the success rate. Mastery
    /// requires at least 3 attempts with a rate of 0.8 or better.
    pub fn derive(attempts: i64, score: f64) -> Self {
        if attempts == 0 {
            MasteryLevel::NotStarted
        } else if attempts < 3 {
            MasteryLevel::Learning
        } else if score / attempts as f64 >= 0.8 {
            MasteryLevel::Mastered
        } else {
            MasteryLevel::Practicing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MasteryLevel::NotStarted => "not_started",
            MasteryLevel::Learning => "learning",
            MasteryLevel::Practicing => "practicing",
            MasteryLevel::Mastered => "mastered",
        }
    }

    /// Parse a stored mastery string, falling back to `NotStarted`
    pub fn parse(s: &str) -> Self {
        match s {
            "not_started" => MasteryLevel::NotStarted,
            "learning" => MasteryLevel::Learning,
            "practicing" => MasteryLevel::Practicing,
            "mastered" => MasteryLevel::Mastered,
            _ => MasteryLevel::NotStarted,
        }
    }
}

/// One progress row: a student's accumulated attempts on a lesson or problem
///
/// `problem_id` is `None` for lesson-level rows. `mastery` is always the
/// value of [`MasteryLevel::derive`] for the stored `attempts`/`score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProgress {
    pub id: i64,
    pub lesson_id: i64,
    pub problem_id: Option<i64>,
    pub attempts: i64,
    pub score: f64,
    pub mastery: MasteryLevel,
    pub last_attempt_at: DateTime<Utc>,
}

impl StudentProgress {
    /// Success rate over all attempts, 0.0 when nothing attempted yet
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.score / self.attempts as f64
        }
    }
}

/// Aggregate progress figures for the whole database
///
/// Built from single GROUP BY queries, so `lessons_started <= total_lessons`
/// and `problems_mastered <= total_problems_attempted` hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub total_lessons: i64,
    pub lessons_started: i64,
    pub lessons_mastered: i64,
    pub total_problems_attempted: i64,
    pub problems_mastered: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mastery_ladder() {
        assert_eq!(MasteryLevel::derive(0, 0.0), MasteryLevel::NotStarted);
        assert_eq!(MasteryLevel::derive(1, 1.0), MasteryLevel::Learning);
        assert_eq!(MasteryLevel::derive(2, 0.0), MasteryLevel::Learning);
        assert_eq!(MasteryLevel::derive(3, 3.0), MasteryLevel::Mastered);
        assert_eq!(MasteryLevel::derive(3, 2.0), MasteryLevel::Practicing);
        assert_eq!(MasteryLevel::derive(10, 1.0), MasteryLevel::Practicing);
    }

    #[test]
    fn test_mastery_exact_threshold() {
        // 4/5 and 8/10 are exactly 0.8
        assert_eq!(MasteryLevel::derive(5, 4.0), MasteryLevel::Mastered);
        assert_eq!(MasteryLevel::derive(10, 8.0), MasteryLevel::Mastered);
        assert_eq!(MasteryLevel::derive(4, 3.0), MasteryLevel::Practicing);
    }

    #[test]
    fn test_mastery_round_trip() {
        for level in [
            MasteryLevel::NotStarted,
            MasteryLevel::Learning,
            MasteryLevel::Practicing,
            MasteryLevel::Mastered,
        ] {
            assert_eq!(MasteryLevel::parse(level.as_str()), level);
        }
        assert_eq!(MasteryLevel::parse("expert"), MasteryLevel::NotStarted);
    }

    #[test]
    fn test_success_rate() {
        let progress = StudentProgress {
            id: 1,
            lesson_id: 2,
            problem_id: None,
            attempts: 4,
            score: 3.0,
            mastery: MasteryLevel::Practicing,
            last_attempt_at: Utc::now(),
        };
        assert!((progress.success_rate() - 0.75).abs() < f64::EPSILON);

        let untouched = StudentProgress {
            attempts: 0,
            score: 0.0,
            ..progress
        };
        assert_eq!(untouched.success_rate(), 0.0);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = ProgressSummary {
            total_lessons: 12,
            lessons_started: 5,
            lessons_mastered: 2,
            total_problems_attempted: 30,
            problems_mastered: 11,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: ProgressSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
        assert!(back.lessons_started <= back.total_lessons);
        assert!(back.problems_mastered <= back.total_problems_attempted);
    }
}
