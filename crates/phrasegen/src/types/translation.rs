use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// One fully expanded translation of a phrase.
///
/// `text` is the chosen candidates joined by single spaces in token order;
/// `weight` is the product of their weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub text: String,
    pub weight: f64,
}

impl TranslationResult {
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

impl Display for TranslationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({})", self.text, self.weight)
    }
}

/// Translations accumulated across every phrase of one run.
pub type ResultSet = Vec<TranslationResult>;
