//! Dictionary-backed translation of phrase lines.

use bon::Builder;
use log::{debug, info};

use super::error::{ExpandError, TranslateError};
use super::expand::{expand, expand_bounded};
use super::rank::rank_in_place;
use crate::parser::tokenize;
use crate::types::{Dictionary, ResultSet, TargetPhrase, TranslationResult};

/// Translates phrase lines against one read-only dictionary.
///
/// The translator owns the dictionary for the whole run. Results from all
/// phrase lines are accumulated into a single [`ResultSet`] and ranked once,
/// so the best translations of every phrase end up interleaved by weight.
///
/// # Example
///
/// ```
/// use phrasegen::Translator;
/// use phrasegen::parser::parse_dictionary;
///
/// let dict = parse_dictionary(["大:big/0.6,large/0.4", "猫:cat/0.9,kitten/0.1"]).unwrap();
/// let translator = Translator::builder()
///     .dictionary(dict)
///     .max_combinations(1_000)
///     .build();
///
/// let ranked = translator.translate_lines(["大 猫"]).unwrap();
/// let texts: Vec<&str> = ranked.iter().map(|r| r.text.as_str()).collect();
/// assert_eq!(texts, ["big cat", "large cat", "big kitten", "large kitten"]);
/// ```
#[derive(Debug, Builder)]
pub struct Translator {
    /// Token to candidates mapping, fixed for the translator's lifetime.
    dictionary: Dictionary,

    /// Ceiling on the number of results a single phrase may expand to.
    ///
    /// `None` expands every phrase completely, however large.
    max_combinations: Option<u64>,
}

impl Translator {
    /// Create a translator with no combination ceiling.
    pub fn new(dictionary: Dictionary) -> Self {
        Translator::builder().dictionary(dictionary).build()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn max_combinations(&self) -> Option<u64> {
        self.max_combinations
    }

    /// Expand one phrase, honoring the combination ceiling. Not ranked.
    pub fn translate_phrase(
        &self,
        phrase: &TargetPhrase,
    ) -> Result<Vec<TranslationResult>, ExpandError> {
        match self.max_combinations {
            Some(limit) => expand_bounded(&self.dictionary, phrase, limit),
            None => expand(&self.dictionary, phrase),
        }
    }

    /// Tokenize, expand and rank a single phrase line.
    pub fn translate_line(&self, line: &str) -> Result<ResultSet, TranslateError> {
        self.translate_lines([line])
    }

    /// Expand every phrase line, in order, without ranking.
    ///
    /// Fails on the first bad line; no results are returned in that case.
    pub fn expand_lines<I>(&self, lines: I) -> Result<ResultSet, TranslateError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut results = ResultSet::new();
        let mut line_count = 0;

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            line_count = line_number;

            let phrase = tokenize(line.as_ref()).map_err(|source| TranslateError::Tokenize {
                line: line_number,
                source,
            })?;
            let expanded = self
                .translate_phrase(&phrase)
                .map_err(|source| TranslateError::Expand {
                    line: line_number,
                    source,
                })?;
            debug!(
                "phrase line {line_number}: {} translations",
                expanded.len()
            );
            results.extend(expanded);
        }

        if line_count == 0 {
            return Err(TranslateError::EmptyInput);
        }

        info!(
            "expanded {line_count} phrases into {} translations",
            results.len()
        );
        Ok(results)
    }

    /// Expand every phrase line and rank the accumulated results by
    /// descending weight.
    pub fn translate_lines<I>(&self, lines: I) -> Result<ResultSet, TranslateError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut results = self.expand_lines(lines)?;
        rank_in_place(&mut results);
        Ok(results)
    }
}
