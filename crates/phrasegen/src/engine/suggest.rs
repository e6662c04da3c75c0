use strsim::levenshtein;

use crate::types::Dictionary;

/// Dictionary tokens within a small edit distance of `token`.
///
/// - no suggestions for single-character tokens (every other single
///   character would be a match)
/// - distance <= 1 for tokens of 2 or 3 characters
/// - distance <= 2 for longer tokens
/// - at most 3 suggestions, closest first, ties in dictionary order
pub fn compute_suggestions(token: &str, dictionary: &Dictionary) -> Vec<String> {
    let max_distance = match token.chars().count() {
        0 | 1 => return Vec::new(),
        2 | 3 => 1,
        _ => 2,
    };

    let mut suggestions: Vec<(usize, &str)> = dictionary
        .tokens()
        .filter_map(|candidate| {
            let distance = levenshtein(token, candidate);
            (distance > 0 && distance <= max_distance).then_some((distance, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(distance, _)| *distance);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
