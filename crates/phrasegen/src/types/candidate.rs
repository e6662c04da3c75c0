use std::fmt::{Display, Formatter, Result as FmtResult};

/// One possible rendering of a dictionary token, with its likelihood weight.
///
/// Candidates are immutable once built; the parser creates them and the
/// expander only reads them.
///
/// # Example
///
/// ```
/// use phrasegen::Candidate;
///
/// let cat = Candidate::new("cat", 0.9);
/// assert_eq!(cat.text(), "cat");
/// assert_eq!(cat.weight(), 0.9);
///
/// let plain = Candidate::unweighted("kitten");
/// assert_eq!(plain.weight(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    text: String,
    weight: f64,
}

impl Candidate {
    /// Weight assigned when an entry carries no `/weight` suffix.
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    /// Create a candidate with an explicit weight.
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }

    /// Create a candidate with the default weight of `1.0`.
    pub fn unweighted(text: impl Into<String>) -> Self {
        Self::new(text, Self::DEFAULT_WEIGHT)
    }

    /// The translation text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The likelihood weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.text, self.weight)
    }
}
