//! Arithmetic classification
//!
//! Scans extracted worksheet text with the pattern dictionary and turns
//! matches into problems with computed answers, worked solutions and hints.
//! Everything downstream (difficulty, templates) derives from the operator
//! and the two operands.

use crate::patterns;
use hornbook_core::Difficulty;

/// Arithmetic operator recognized on a worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Display symbol used in question text
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "x",
            Operation::Division => "÷",
        }
    }

    /// Lesson-level teaching steps for a worksheet dominated by this operator
    pub fn teaching_steps(&self) -> Vec<String> {
        let steps: &[&str] = match self {
            Operation::Addition => &[
                "Read the problem and find the two numbers being added",
                "Start with the bigger number",
                "Count up by the smaller number to find the sum",
                "Write the answer after the equals sign",
            ],
            Operation::Subtraction => &[
                "Read the problem and find the starting number",
                "Count backwards by the number being taken away",
                "The number you land on is the difference",
                "Write the answer after the equals sign",
            ],
            Operation::Multiplication => &[
                "Read the problem as groups: the first number tells how many groups",
                "The second number tells how many are in each group",
                "Skip-count or use a times table to find the total",
                "Write the answer after the equals sign",
            ],
            Operation::Division => &[
                "Read the problem as sharing: split the first number into equal groups",
                "The second number tells how many groups to make",
                "Count how many end up in each group; anything left over is the remainder",
                "Write the answer after the equals sign",
            ],
        };
        steps.iter().map(|s| s.to_string()).collect()
    }
}

/// One matched problem with its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticProblem {
    pub op: Operation,
    pub lhs: i64,
    pub rhs: i64,
}

impl ArithmeticProblem {
    /// Question text in the house style
    pub fn question(&self) -> String {
        format!("What is {} {} {}?", self.lhs, self.op.symbol(), self.rhs)
    }

    /// Compute the display answer by direct arithmetic
    ///
    /// Division reports quotient and remainder; clean divisions drop the
    /// remainder clause.
    pub fn answer(&self) -> String {
        match self.op {
            Operation::Addition => (self.lhs + self.rhs).to_string(),
            Operation::Subtraction => (self.lhs - self.rhs).to_string(),
            Operation::Multiplication => (self.lhs * self.rhs).to_string(),
            Operation::Division => {
                let quotient = self.lhs / self.rhs;
                let remainder = self.lhs % self.rhs;
                if remainder == 0 {
                    quotient.to_string()
                } else {
                    format!("{} remainder {}", quotient, remainder)
                }
            }
        }
    }

    /// Worked solution, one step per line
    pub fn solution_steps(&self) -> Vec<String> {
        let answer = self.answer();
        match self.op {
            Operation::Addition => vec![
                format!("Start with {}", self.lhs),
                format!("Count up {} more", self.rhs),
                format!("{} + {} = {}", self.lhs, self.rhs, answer),
            ],
            Operation::Subtraction => vec![
                format!("Start with {}", self.lhs),
                format!("Take away {}", self.rhs),
                format!("{} - {} = {}", self.lhs, self.rhs, answer),
            ],
            Operation::Multiplication => vec![
                format!("Think of {} groups with {} in each", self.lhs, self.rhs),
                format!("Add {} together {} times", self.rhs, self.lhs),
                format!("{} x {} = {}", self.lhs, self.rhs, answer),
            ],
            Operation::Division => {
                let quotient = self.lhs / self.rhs;
                let remainder = self.lhs % self.rhs;
                let mut steps = vec![
                    format!("Ask how many times {} fits into {}", self.rhs, self.lhs),
                    format!("{} x {} = {}", self.rhs, quotient, self.rhs * quotient),
                ];
                if remainder != 0 {
                    steps.push(format!("{} left over", remainder));
                }
                steps.push(format!("{} ÷ {} = {}", self.lhs, self.rhs, answer));
                steps
            }
        }
    }

    /// One hint per problem, templated per operator
    pub fn hints(&self) -> Vec<String> {
        let hint = match self.op {
            Operation::Addition => format!("Try counting up from {}", self.lhs.max(self.rhs)),
            Operation::Subtraction => format!("Count backwards from {}", self.lhs),
            Operation::Multiplication => format!("Skip-count by {}, {} times", self.rhs, self.lhs),
            Operation::Division => {
                format!("Share {} into {} equal groups", self.lhs, self.rhs)
            }
        };
        vec![hint]
    }

    /// Difficulty from operand magnitude
    pub fn difficulty(&self) -> Difficulty {
        if self.lhs < 10 && self.rhs < 10 {
            Difficulty::Easy
        } else if self.lhs < 100 && self.rhs < 100 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }
}

/// Scan text for arithmetic problems, grouped by operator
///
/// Operands that overflow i64 are skipped, as are divisions by zero.
pub fn scan_problems(text: &str) -> Vec<ArithmeticProblem> {
    let mut problems = Vec::new();

    let scanners = [
        (&patterns::ADDITION_RE, Operation::Addition),
        (&patterns::SUBTRACTION_RE, Operation::Subtraction),
        (&patterns::MULTIPLICATION_RE, Operation::Multiplication),
        (&patterns::DIVISION_RE, Operation::Division),
    ];

    for (re, op) in scanners {
        for caps in re.captures_iter(text) {
            let (Ok(lhs), Ok(rhs)) = (caps[1].parse::<i64>(), caps[2].parse::<i64>()) else {
                continue;
            };
            if op == Operation::Division && rhs == 0 {
                continue;
            }
            problems.push(ArithmeticProblem { op, lhs, rhs });
        }
    }

    problems
}

/// Subject a worksheet files under
///
/// Arithmetic matches win; otherwise fill-in-the-blank runs mark the sheet
/// as language arts. Unrecognizable text defaults to Mathematics, matching
/// the ingestion pipeline's math-first bias.
pub fn detect_subject(text: &str, problems: &[ArithmeticProblem]) -> &'static str {
    if !problems.is_empty() {
        "Mathematics"
    } else if patterns::BLANK_RE.is_match(text) {
        "English Language Arts"
    } else {
        "Mathematics"
    }
}
