//! Cartesian expansion of a phrase into weighted translations.

use log::debug;

use super::error::ExpandError;
use super::suggest::compute_suggestions;
use crate::types::{Candidate, Dictionary, TargetPhrase, TranslationResult};

/// Upper bound on the up-front result allocation.
const MAX_PREALLOCATED_RESULTS: u64 = 1 << 16;

/// Expand `phrase` into every translation obtained by choosing one candidate
/// per token.
///
/// Results come out in lexicographic Cartesian-product order over each
/// token's candidate list: token 0 varies slowest, the last token fastest.
/// Each result's text is the chosen candidates joined by single spaces, and
/// its weight is the product of their weights.
///
/// All tokens are looked up before anything is generated, so an unknown
/// token fails the whole phrase with [`ExpandError::UnknownToken`] naming
/// the first one.
///
/// Time and memory are `O(Π |candidates(token)|)`, exponential in phrase
/// length. Every combination is produced; use [`expand_bounded`] to refuse
/// phrases that are too large instead.
///
/// # Example
///
/// ```
/// use phrasegen::engine::expand;
/// use phrasegen::parser::{parse_dictionary, tokenize};
///
/// let dict = parse_dictionary(["大:big/0.6,large/0.4", "猫:cat/0.9,kitten/0.1"]).unwrap();
/// let results = expand(&dict, &tokenize("大 猫").unwrap()).unwrap();
///
/// let texts: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
/// assert_eq!(texts, ["big cat", "big kitten", "large cat", "large kitten"]);
/// ```
pub fn expand(
    dictionary: &Dictionary,
    phrase: &TargetPhrase,
) -> Result<Vec<TranslationResult>, ExpandError> {
    let columns = resolve(dictionary, phrase)?;
    let count = product(&columns);
    debug!(
        "expanding '{phrase}': {} tokens, {count} combinations",
        phrase.len()
    );
    Ok(expand_columns(&columns, count))
}

/// Like [`expand`], but fails with [`ExpandError::TooManyCombinations`]
/// before generating anything if the phrase would produce more than
/// `limit` results.
pub fn expand_bounded(
    dictionary: &Dictionary,
    phrase: &TargetPhrase,
    limit: u64,
) -> Result<Vec<TranslationResult>, ExpandError> {
    let columns = resolve(dictionary, phrase)?;
    let count = product(&columns);
    if count > limit {
        return Err(ExpandError::TooManyCombinations {
            phrase: phrase.to_string(),
            count,
            limit,
        });
    }
    debug!(
        "expanding '{phrase}': {} tokens, {count} combinations (limit {limit})",
        phrase.len()
    );
    Ok(expand_columns(&columns, count))
}

/// Number of results [`expand`] would produce for `phrase`, saturating at
/// `u64::MAX`.
pub fn combination_count(
    dictionary: &Dictionary,
    phrase: &TargetPhrase,
) -> Result<u64, ExpandError> {
    resolve(dictionary, phrase).map(|columns| product(&columns))
}

/// Look up every token's candidate list, in phrase order.
fn resolve<'d>(
    dictionary: &'d Dictionary,
    phrase: &TargetPhrase,
) -> Result<Vec<&'d [Candidate]>, ExpandError> {
    phrase
        .iter()
        .enumerate()
        .map(|(index, token)| {
            dictionary
                .get(token)
                .ok_or_else(|| ExpandError::UnknownToken {
                    token: token.clone(),
                    index,
                    suggestions: compute_suggestions(token, dictionary),
                })
        })
        .collect()
}

fn product(columns: &[&[Candidate]]) -> u64 {
    if columns.iter().any(|column| column.is_empty()) {
        return 0;
    }
    columns
        .iter()
        .try_fold(1_u64, |acc, column| {
            acc.checked_mul(u64::try_from(column.len()).unwrap_or(u64::MAX))
        })
        .unwrap_or(u64::MAX)
}

fn expand_columns(columns: &[&[Candidate]], count: u64) -> Vec<TranslationResult> {
    let capacity = usize::try_from(count.min(MAX_PREALLOCATED_RESULTS)).unwrap_or(0);
    let mut results = Vec::with_capacity(capacity);
    let mut selection = Vec::with_capacity(columns.len());
    backtrack(columns, &mut selection, &mut results);
    results
}

/// Depth-first walk over the candidate columns.
///
/// `selection` holds one candidate per column already visited; each push is
/// popped again before the next sibling is tried.
fn backtrack<'d>(
    columns: &[&'d [Candidate]],
    selection: &mut Vec<&'d Candidate>,
    results: &mut Vec<TranslationResult>,
) {
    let Some(candidates) = columns.get(selection.len()) else {
        results.push(materialize(selection));
        return;
    };
    for candidate in *candidates {
        selection.push(candidate);
        backtrack(columns, selection, results);
        selection.pop();
    }
}

fn materialize(selection: &[&Candidate]) -> TranslationResult {
    let mut text = String::new();
    let mut weight = 1.0;
    for (index, candidate) in selection.iter().enumerate() {
        if index > 0 {
            text.push(' ');
        }
        text.push_str(candidate.text());
        weight *= candidate.weight();
    }
    TranslationResult::new(text, weight)
}
