//! Builtin curriculum content
//!
//! Representative lesson content for Mathematics, Science, and English
//! Language Arts, defined as plain [`SubjectSpec`] trees. [`starter`] is the
//! compact set behind `seed-curriculum`; [`massive`] extends each subject
//! with further topics for `seed-massive-curriculum`.

mod ela;
mod math;
mod science;

use crate::spec::SubjectSpec;

/// The compact builtin curriculum
pub fn starter() -> Vec<SubjectSpec> {
    vec![math::starter(), science::starter(), ela::starter()]
}

/// The full builtin curriculum, a superset of [`starter`]
pub fn massive() -> Vec<SubjectSpec> {
    vec![math::massive(), science::massive(), ela::massive()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_covers_three_subjects() {
        let subjects = starter();
        let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["Mathematics", "Science", "English Language Arts"]
        );
    }

    #[test]
    fn test_massive_extends_starter() {
        let starter_set = starter();
        let massive_set = massive();
        assert_eq!(starter_set.len(), massive_set.len());

        for (compact, full) in starter_set.iter().zip(&massive_set) {
            assert_eq!(compact.name, full.name);
            assert!(
                full.topics.len() > compact.topics.len(),
                "{} gains topics in the full set",
                full.name
            );
            // The full set keeps the starter topics in front, same order
            for (i, topic) in compact.topics.iter().enumerate() {
                assert_eq!(topic.name, full.topics[i].name);
            }
        }
    }

    #[test]
    fn test_every_lesson_teaches_and_practices() {
        for subject in massive() {
            for topic in &subject.topics {
                assert!(!topic.lessons.is_empty(), "{} has lessons", topic.name);
                for lesson in &topic.lessons {
                    assert!(
                        !lesson.teaching_steps.is_empty(),
                        "{} has teaching steps",
                        lesson.title
                    );
                    assert!(
                        !lesson.problems.is_empty(),
                        "{} has practice problems",
                        lesson.title
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_problem_has_an_answer() {
        for subject in massive() {
            for topic in &subject.topics {
                for lesson in &topic.lessons {
                    for problem in &lesson.problems {
                        assert!(!problem.question.is_empty());
                        assert!(
                            !problem.answer.is_empty(),
                            "unanswered: {}",
                            problem.question
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_subject_names_are_distinct() {
        let subjects = massive();
        let mut names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), subjects.len());
    }
}
