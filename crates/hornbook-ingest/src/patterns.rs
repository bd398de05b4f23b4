//! Worksheet pattern dictionary
//!
//! A fixed set of regular expressions, compiled once. Worksheets write
//! problems in "12 + 7 =" shape with loose spacing; the trailing `=` is what
//! separates a problem from prose that happens to mention numbers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern: "12 + 7 ="
pub static ADDITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*\+\s*(\d+)\s*=").unwrap());

/// Pattern: "20 - 8 ="
pub static SUBTRACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)\s*=").unwrap());

/// Pattern: "6 x 7 =", also accepting ×, X and *
pub static MULTIPLICATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*[xX×*]\s*(\d+)\s*=").unwrap());

/// Pattern: "35 ÷ 5 =", also accepting /
pub static DIVISION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*[÷/]\s*(\d+)\s*=").unwrap());

/// Pattern: a fill-in-the-blank run ("The cat ___ on the mat")
pub static BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{3,}").unwrap());
