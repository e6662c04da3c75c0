//! Expansion engine.
//!
//! Turns a tokenized phrase into every weighted translation the dictionary
//! allows, and ranks the results by weight.

mod error;
mod expand;
mod rank;
mod suggest;
mod translator;

pub use error::{ExpandError, TranslateError};
pub use expand::{combination_count, expand, expand_bounded};
pub use rank::{rank, rank_in_place};
pub use suggest::compute_suggestions;
pub use translator::Translator;
