//! Parse error types for dictionary records and phrase lines.

use thiserror::Error;

/// An error that occurred while parsing dictionary or phrase text.
///
/// Line and column numbers are 1-based; columns count bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No input lines, or an empty phrase line.
    #[error("input is empty")]
    EmptyInput,

    /// A dictionary line that does not follow `TOKEN:ENTRY(,ENTRY)*`.
    #[error("malformed record at {line}:{column}: {message}")]
    MalformedRecord {
        line: usize,
        column: usize,
        message: String,
    },

    /// A token defined on more than one line.
    #[error("duplicate token '{token}' at line {line} (first defined at line {first_line})")]
    DuplicateKey {
        token: String,
        line: usize,
        first_line: usize,
    },

    /// A weight that is not a decimal number in `(0, 1]`.
    #[error("invalid weight '{value}' at {line}:{column}")]
    InvalidWeight {
        line: usize,
        column: usize,
        value: String,
    },
}

impl ParseError {
    /// Source position of the error, if it has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::MalformedRecord { line, column, .. }
            | ParseError::InvalidWeight { line, column, .. } => Some((*line, *column)),
            ParseError::DuplicateKey { line, .. } => Some((*line, 1)),
        }
    }
}
