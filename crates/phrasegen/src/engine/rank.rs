use log::debug;

use crate::types::TranslationResult;

/// Sort results by descending weight.
///
/// The sort is stable: results with equal weights keep the order in which
/// they were generated, so ranking the same input always gives the same
/// output and `rank(rank(x)) == rank(x)`.
///
/// # Example
///
/// ```
/// use phrasegen::TranslationResult;
/// use phrasegen::engine::rank;
///
/// let ranked = rank(vec![
///     TranslationResult::new("big kitten", 0.06),
///     TranslationResult::new("large cat", 0.36),
/// ]);
/// assert_eq!(ranked[0].text, "large cat");
/// ```
pub fn rank(mut results: Vec<TranslationResult>) -> Vec<TranslationResult> {
    rank_in_place(&mut results);
    results
}

/// In-place form of [`rank`].
pub fn rank_in_place(results: &mut [TranslationResult]) {
    debug!("ranking {} results", results.len());
    results.sort_by(|a, b| b.weight.total_cmp(&a.weight));
}
