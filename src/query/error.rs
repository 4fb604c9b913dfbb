//! Error types for query compilation and matching.

use thiserror::Error;

/// Errors that can occur while compiling or evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A literal segment did not compile into a valid pattern.
    #[error("Malformed pattern '{segment}' in segment {index} (offset {offset}): {reason}")]
    MalformedPattern {
        /// The segment text as written in the query.
        segment: String,
        /// Zero-based segment index within the query.
        index: usize,
        /// Byte offset of the segment within the query string.
        offset: usize,
        /// Message reported by the regex engine.
        reason: String,
    },
    /// A `..` step climbed above the first segment of the path.
    #[error("Step {step} climbs above the start of the path")]
    EmptyPathUnderflow { step: usize },
    /// A dialect name that is not one of regex, glob, grep or literal.
    #[error("Unknown query dialect '{0}', expected one of: regex, glob, grep, literal")]
    UnknownDialect(String),
}
