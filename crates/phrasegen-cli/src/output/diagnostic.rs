//! Miette diagnostic wrapper for dictionary and phrase errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use phrasegen::{ExpandError, ParseError, TranslateError};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a dictionary or phrase file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(phrasegen::input))]
pub struct PhrasegenDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PhrasegenDiagnostic {
    /// Create a diagnostic from a dictionary ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let help = match err {
            ParseError::EmptyInput => Some("the dictionary needs at least one record".into()),
            ParseError::MalformedRecord { .. } => {
                Some("records look like `TOKEN:text/weight,text/weight`".into())
            }
            ParseError::DuplicateKey {
                token, first_line, ..
            } => Some(format!("'{token}' is first defined on line {first_line}")),
            ParseError::InvalidWeight { .. } => {
                Some("weights are decimal numbers greater than 0 and at most 1".into())
            }
        };
        let (line, column) = err.position().unwrap_or((1, 1));
        Self::at(path, content, line, column, 1, err.to_string(), help)
    }

    /// Create a diagnostic from a TranslateError against the phrase file.
    pub fn from_translate_error(path: &Path, content: &str, err: &TranslateError) -> Self {
        match err {
            TranslateError::EmptyInput => Self::at(path, content, 1, 1, 0, err.to_string(), None),
            TranslateError::Tokenize { line, .. } => {
                Self::at(path, content, *line, 1, 1, err.to_string(), None)
            }
            TranslateError::Expand { line, source } => match source {
                ExpandError::UnknownToken {
                    token,
                    index,
                    suggestions,
                } => {
                    let column = token_column(content, *line, *index);
                    let help = if suggestions.is_empty() {
                        format!("add a `{token}:...` record to the dictionary")
                    } else {
                        format!("did you mean {}?", suggestions.join(", "))
                    };
                    Self::at(
                        path,
                        content,
                        *line,
                        column,
                        token.len().max(1),
                        err.to_string(),
                        Some(help),
                    )
                }
                ExpandError::TooManyCombinations { phrase, .. } => Self::at(
                    path,
                    content,
                    *line,
                    1,
                    phrase.len().max(1),
                    err.to_string(),
                    Some("raise --max-combinations or split the phrase".into()),
                ),
            },
        }
    }

    fn at(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        len: usize,
        message: String,
        help: Option<String>,
    ) -> Self {
        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = (line_offset(content, line) + column.saturating_sub(1)).min(content.len());
        let len = len.min(content.len() - offset);

        PhrasegenDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            message,
            help,
        }
    }
}

/// Byte offset of the start of 1-based `line`, counting line terminators.
fn line_offset(content: &str, line: usize) -> usize {
    content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum()
}

/// 1-based byte column of the `index`-th space-separated token on `line`.
fn token_column(content: &str, line: usize, index: usize) -> usize {
    content
        .lines()
        .nth(line.saturating_sub(1))
        .map(|text| {
            text.split(' ')
                .take(index)
                .map(|token| token.len() + 1)
                .sum::<usize>()
                + 1
        })
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_offset_counts_crlf() {
        let content = "a:b\r\nc:d\n";
        assert_eq!(line_offset(content, 1), 0);
        assert_eq!(line_offset(content, 2), 5);
    }

    #[test]
    fn token_column_skips_previous_tokens() {
        let content = "猫\n大 鱼 猫\n";
        assert_eq!(token_column(content, 2, 0), 1);
        assert_eq!(token_column(content, 2, 1), 5);
        assert_eq!(token_column(content, 2, 2), 9);
    }
}
