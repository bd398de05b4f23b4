//! Worksheet ingestion for hornbook
//!
//! Takes an uploaded worksheet file and turns it into a stored lesson with
//! practice problems: extract text, match arithmetic patterns, compute
//! answers, pad thin results with synthesized fillers, insert through the
//! storage layer. See [`WorksheetPipeline`] for the orchestration and the
//! phase modules for the pieces:
//!
//! - [`extract`]: `TextExtractor` trait + plain-text/markdown implementation
//! - [`patterns`]: the compiled regex dictionary
//! - [`classify`]: match scanning, answer computation, templates
//! - [`synthesize`]: filler generation up to the minimum problem count
//! - [`pipeline`]: the straight-line orchestrator

pub mod classify;
pub mod error;
pub mod extract;
pub mod patterns;
pub mod pipeline;
pub mod synthesize;

pub use classify::{detect_subject, scan_problems, ArithmeticProblem, Operation};
pub use error::{IngestError, IngestResult};
pub use extract::{PlainTextExtractor, TextExtractor};
pub use pipeline::{IngestConfig, IngestReport, WorksheetPipeline};
pub use synthesize::MIN_PROBLEMS;
