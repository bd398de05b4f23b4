//! Filler problem synthesis
//!
//! Worksheets with thin pickings still get a usable lesson: the pipeline
//! pads up to a minimum with generated problems that reuse the sheet's
//! dominant operator and small incrementing operands.

use crate::classify::{ArithmeticProblem, Operation};
use tracing::debug;

/// Minimum problems per ingested lesson
pub const MIN_PROBLEMS: usize = 10;

/// Most frequent operator among the found problems
///
/// Empty input (nothing matched, or extraction came back blank) defaults to
/// addition; ties go to the earlier operator in curriculum order.
pub fn dominant_operation(problems: &[ArithmeticProblem]) -> Operation {
    let mut best = Operation::Addition;
    let mut best_count = 0;
    for op in [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ] {
        let count = problems.iter().filter(|p| p.op == op).count();
        if count > best_count {
            best = op;
            best_count = count;
        }
    }
    best
}

/// Pad `problems` until it holds at least `min_problems`, returning how many
/// fillers were added
///
/// Subtraction fillers keep their result positive; division fillers divide
/// cleanly so every synthesized answer is a whole number.
pub fn pad_problems(problems: &mut Vec<ArithmeticProblem>, min_problems: usize) -> usize {
    if problems.len() >= min_problems {
        return 0;
    }

    let op = dominant_operation(problems);
    let mut added = 0;
    let mut i: i64 = 0;
    while problems.len() < min_problems {
        let (lhs, rhs) = match op {
            Operation::Addition => (i + 2, i + 1),
            Operation::Subtraction => (2 * i + 5, i + 1),
            Operation::Multiplication => (i + 2, i + 1),
            Operation::Division => ((i + 2) * (i + 1), i + 1),
        };
        problems.push(ArithmeticProblem { op, lhs, rhs });
        added += 1;
        i += 1;
    }

    debug!(added, op = ?op, "Synthesized filler problems");
    added
}
