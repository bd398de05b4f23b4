//! Educational standard references
//!
//! Standard codes (e.g. "3.OA.A.1") attached to a subject and grade level,
//! seeded alongside the full builtin curriculum.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    pub id: i64,
    pub subject_id: i64,
    pub grade_level: i64,
    pub code: String,
    pub description: String,
}

/// Insert parameters for a standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStandard {
    pub subject_id: i64,
    pub grade_level: i64,
    pub code: String,
    pub description: String,
}

impl NewStandard {
    pub fn new(
        subject_id: i64,
        grade_level: i64,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            subject_id,
            grade_level,
            code: code.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_standard() {
        let standard = NewStandard::new(1, 3, "3.OA.A.1", "Interpret products of whole numbers");
        assert_eq!(standard.subject_id, 1);
        assert_eq!(standard.grade_level, 3);
        assert_eq!(standard.code, "3.OA.A.1");
    }
}
