use std::collections::HashMap;

use thiserror::Error;

use super::Candidate;

/// Returned by [`Dictionary::insert`] when a token is already present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token '{token}' is already defined")]
pub struct DuplicateToken {
    pub token: String,
}

/// Token to candidate-list mapping.
///
/// Candidate lists keep the order in which they appeared in the source line,
/// and tokens keep the order in which they were inserted, so every traversal
/// of a dictionary is deterministic. Keys are unique: inserting an existing
/// token is rejected rather than overwriting it.
///
/// # Example
///
/// ```
/// use phrasegen::{Candidate, Dictionary};
///
/// let mut dict = Dictionary::new();
/// dict.insert("猫", vec![Candidate::new("cat", 0.9), Candidate::new("kitten", 0.1)])
///     .unwrap();
///
/// assert_eq!(dict.get("猫").map(<[Candidate]>::len), Some(2));
/// assert!(dict.insert("猫", vec![]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<Candidate>>,
    /// Tokens in insertion order.
    order: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the candidates for a token that is not yet present.
    pub fn insert(
        &mut self,
        token: impl Into<String>,
        candidates: Vec<Candidate>,
    ) -> Result<(), DuplicateToken> {
        let token = token.into();
        if self.entries.contains_key(&token) {
            return Err(DuplicateToken { token });
        }
        self.order.push(token.clone());
        self.entries.insert(token, candidates);
        Ok(())
    }

    /// Candidates for `token`, in source order.
    pub fn get(&self, token: &str) -> Option<&[Candidate]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of candidates across all tokens.
    pub fn candidate_count(&self) -> usize {
        self.iter().map(|(_, candidates)| candidates.len()).sum()
    }

    /// Tokens in insertion order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(token, candidates)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Candidate])> {
        self.order.iter().filter_map(|token| {
            self.entries
                .get(token)
                .map(|candidates| (token.as_str(), candidates.as_slice()))
        })
    }
}
