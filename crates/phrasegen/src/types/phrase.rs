use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Index;
use std::slice::Iter;

/// An ordered sequence of tokens to translate.
///
/// Produced by [`tokenize`](crate::parser::tokenize). Tokens may be empty
/// strings: a line ending in a space yields a trailing empty token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetPhrase {
    tokens: Vec<String>,
}

impl TargetPhrase {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.tokens.iter()
    }
}

impl Index<usize> for TargetPhrase {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TargetPhrase {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for TargetPhrase {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl Display for TargetPhrase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.tokens.join(" "))
    }
}
