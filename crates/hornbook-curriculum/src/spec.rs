//! Nested curriculum definitions as plain data
//!
//! A [`SubjectSpec`] is the unit the seeder consumes: one subject with its
//! whole topic/lesson/problem tree inline and no database ids. Display order
//! at every level comes from position, so the builtin modules only deal in
//! names and content.

use hornbook_core::{Difficulty, Example};

/// One subject with its full curriculum tree
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectSpec {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub topics: Vec<TopicSpec>,
}

impl SubjectSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            topics: Vec::new(),
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
    pub fn with_topics(mut self, topics: impl IntoIterator<Item = TopicSpec>) -> Self {
        self.topics = topics.into_iter().collect();
        self
    }

    /// Total lesson count across all topics
    pub fn lesson_count(&self) -> usize {
        self.topics.iter().map(|t| t.lessons.len()).sum()
    }

    /// Total problem count across all lessons
    pub fn problem_count(&self) -> usize {
        self.topics
            .iter()
            .flat_map(|t| &t.lessons)
            .map(|l| l.problems.len())
            .sum()
    }
}

/// One topic and its lessons
#[derive(Debug, Clone, PartialEq)]
pub struct TopicSpec {
    pub name: String,
    pub description: String,
    pub lessons: Vec<LessonSpec>,
}

impl TopicSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            lessons: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_lessons(mut self, lessons: impl IntoIterator<Item = LessonSpec>) -> Self {
        self.lessons = lessons.into_iter().collect();
        self
    }
}

/// One lesson: prose, teaching steps, examples, practice problems
#[derive(Debug, Clone, PartialEq)]
pub struct LessonSpec {
    pub title: String,
    pub description: String,
    pub teaching_steps: Vec<String>,
    pub examples: Vec<Example>,
    pub problems: Vec<ProblemSpec>,
}

impl LessonSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            teaching_steps: Vec::new(),
            examples: Vec::new(),
            problems: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_teaching_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.teaching_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_examples(mut self, examples: impl IntoIterator<Item = Example>) -> Self {
        self.examples = examples.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_problems(mut self, problems: impl IntoIterator<Item = ProblemSpec>) -> Self {
        self.problems = problems.into_iter().collect();
        self
    }
}

/// One practice problem
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemSpec {
    pub question: String,
    pub answer: String,
    pub solution_steps: Vec<String>,
    pub hints: Vec<String>,
    pub difficulty: Difficulty,
}

impl ProblemSpec {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            solution_steps: Vec::new(),
            hints: Vec::new(),
            difficulty: Difficulty::Medium,
        }
    }

    #[must_use]
    pub fn with_solution_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.solution_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}
