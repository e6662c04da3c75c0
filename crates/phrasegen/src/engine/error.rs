//! Error types for expansion and translation.

use thiserror::Error;

use crate::parser::ParseError;

/// An error that occurred while expanding a phrase against a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A phrase token has no dictionary entry.
    #[error("unknown token '{token}' at index {index}{}", did_you_mean(suggestions))]
    UnknownToken {
        token: String,
        /// 0-based position of the token in the phrase.
        index: usize,
        /// Dictionary tokens close to the unknown one, closest first.
        suggestions: Vec<String>,
    },

    /// The phrase would produce more results than the configured ceiling.
    #[error("phrase '{phrase}' expands to {count} combinations, limit is {limit}")]
    TooManyCombinations { phrase: String, count: u64, limit: u64 },
}

/// An error that occurred while translating phrase lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// There were no phrase lines at all.
    #[error("no phrase lines to translate")]
    EmptyInput,

    /// A phrase line could not be tokenized.
    #[error("phrase line {line}: {source}")]
    Tokenize {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// A phrase line could not be expanded.
    #[error("phrase line {line}: {source}")]
    Expand {
        line: usize,
        #[source]
        source: ExpandError,
    },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
