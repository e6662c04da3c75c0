//! Weighted dictionary expansion of token phrases into ranked translations.
//!
//! A dictionary maps each source token to an ordered list of weighted
//! candidate translations. A phrase is translated by choosing one candidate
//! per token in every possible way; each combination's weight is the product
//! of the chosen weights, and the combinations are ranked by weight.
//!
//! The four core operations are [`parse_dictionary`], [`tokenize`],
//! [`expand`] and [`rank`]. [`Translator`] drives them over many phrase
//! lines, and [`io`] reads and writes the line-oriented file formats.
//!
//! # Example
//!
//! ```
//! use phrasegen::{expand, parse_dictionary, rank, tokenize};
//!
//! let dict = parse_dictionary(["大:big/0.6,large/0.4", "猫:cat/0.9,kitten/0.1"]).unwrap();
//! let ranked = rank(expand(&dict, &tokenize("大 猫").unwrap()).unwrap());
//!
//! assert_eq!(ranked[0].text, "big cat");
//! assert_eq!(ranked[1].text, "large cat");
//! ```

pub mod engine;
pub mod io;
pub mod parser;
pub mod types;

pub use engine::{
    ExpandError, TranslateError, Translator, combination_count, compute_suggestions, expand,
    expand_bounded, rank, rank_in_place,
};
pub use parser::{ParseError, parse_dictionary, parse_dictionary_str, tokenize};
pub use types::{Candidate, Dictionary, DuplicateToken, ResultSet, TargetPhrase, TranslationResult};
