//! Error types for the reconstruction pipeline.

use thiserror::Error;

/// Primary error type for dump ingestion and record handling.
///
/// The layout heuristics themselves never fail: a wrong line join or a
/// missed header is an accuracy issue, not an error.
#[derive(Error, Debug)]
pub enum ReflowError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid layout dump: {0}")]
    Dump(serde_json::Error),

    #[error("malformed record at line {line}: {source}")]
    RecordSyntax {
        line: usize,
        source: serde_json::Error,
    },

    #[error("inconsistent record at line {line}: {reason}")]
    RecordShape { line: usize, reason: String },
}

/// Convenience Result type alias for ReflowError.
pub type Result<T> = std::result::Result<T, ReflowError>;
