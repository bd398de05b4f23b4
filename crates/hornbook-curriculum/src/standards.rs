//! Builtin grade-level standard codes
//!
//! A representative slice of Common Core (math, ELA) and NGSS (science)
//! codes, keyed by subject name so the seeder can resolve the subject id at
//! seed time. Seeded alongside the full curriculum.

/// One standard code waiting to be attached to a subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardSpec {
    /// Subject name the code belongs to; must match a seeded subject
    pub subject: &'static str,
    pub grade_level: i64,
    pub code: &'static str,
    pub description: &'static str,
}

impl StandardSpec {
    const fn new(
        subject: &'static str,
        grade_level: i64,
        code: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            subject,
            grade_level,
            code,
            description,
        }
    }
}

/// The builtin standard set
pub fn builtin() -> Vec<StandardSpec> {
    vec![
        // Mathematics (Common Core)
        StandardSpec::new(
            "Mathematics",
            1,
            "1.OA.A.1",
            "Use addition and subtraction within 20 to solve word problems",
        ),
        StandardSpec::new(
            "Mathematics",
            2,
            "2.NBT.B.5",
            "Fluently add and subtract within 100 using place value strategies",
        ),
        StandardSpec::new(
            "Mathematics",
            3,
            "3.OA.A.1",
            "Interpret products of whole numbers as equal groups",
        ),
        StandardSpec::new(
            "Mathematics",
            3,
            "3.OA.A.2",
            "Interpret whole-number quotients as equal shares",
        ),
        StandardSpec::new(
            "Mathematics",
            3,
            "3.NF.A.1",
            "Understand a fraction as one part of a whole partitioned into equal parts",
        ),
        // Science (NGSS)
        StandardSpec::new(
            "Science",
            2,
            "2-LS4-1",
            "Make observations of plants and animals to compare the diversity of life",
        ),
        StandardSpec::new(
            "Science",
            2,
            "2-ESS2-3",
            "Obtain information to identify where water is found on Earth",
        ),
        StandardSpec::new(
            "Science",
            3,
            "3-PS2-1",
            "Investigate the effects of balanced and unbalanced forces on motion",
        ),
        StandardSpec::new(
            "Science",
            5,
            "5-PS1-1",
            "Develop a model that matter is made of particles too small to be seen",
        ),
        // English Language Arts (Common Core)
        StandardSpec::new(
            "English Language Arts",
            2,
            "RI.2.2",
            "Identify the main topic of a multiparagraph text",
        ),
        StandardSpec::new(
            "English Language Arts",
            3,
            "W.3.1",
            "Write opinion pieces supporting a point of view with reasons",
        ),
        StandardSpec::new(
            "English Language Arts",
            3,
            "L.3.4",
            "Determine word meanings using affixes and context",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let specs = builtin();
        let mut codes: Vec<&str> = specs.iter().map(|s| s.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), specs.len());
    }

    #[test]
    fn test_every_subject_has_standards() {
        let specs = builtin();
        for subject in ["Mathematics", "Science", "English Language Arts"] {
            assert!(
                specs.iter().any(|s| s.subject == subject),
                "{subject} has standards"
            );
        }
    }

    #[test]
    fn test_grade_levels_are_plausible() {
        for spec in builtin() {
            assert!((1..=8).contains(&spec.grade_level), "{}", spec.code);
        }
    }
}
