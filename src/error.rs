//! Error types for seqannot

use thiserror::Error;

/// Result type alias for seqannot operations
pub type Result<T> = std::result::Result<T, SeqannotError>;

/// Error types that can occur in seqannot
///
/// Structure errors always carry the 1-based line number of the offending
/// line. Unknown top-level keywords and unknown qualifier keys are NOT
/// errors: the parsers skip them so files using future GenBank vocabulary
/// still parse.
#[derive(Debug, Error)]
pub enum SeqannotError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// LOCUS line with fewer than the 7 required tokens
    #[error("Malformed LOCUS line at line {line}: {msg}")]
    MalformedLocus {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// Invalid GenBank structure (e.g. a feature declaration without a location)
    #[error("Invalid GenBank format at line {line}: {msg}")]
    InvalidGenBankFormat {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// A block keyword with no body before end of input
    #[error("Truncated {block} block: input ends at line {line}")]
    TruncatedBlock {
        /// Block keyword (FEATURES, REFERENCE, SOURCE)
        block: String,
        /// Line number of the block keyword
        line: usize,
    },

    /// Invalid GFF3 line (wrong column count, unparsable coordinates)
    #[error("Invalid GFF format at line {line}: {msg}")]
    InvalidGffFormat {
        /// Line number where error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
