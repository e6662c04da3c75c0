//! Parsers for dictionary records and target-phrase lines.
//!
//! Dictionary text is one record per line, `TOKEN:TEXT[/WEIGHT],TEXT[/WEIGHT],...`,
//! and phrase text is one phrase per line with tokens separated by spaces.
//! There is no escaping: `:`, `,` and `/` are always delimiters where the
//! grammar expects them.

mod dictionary;
pub mod error;
mod phrase;

pub use dictionary::{parse_dictionary, parse_dictionary_str};
pub use error::ParseError;
pub use phrase::tokenize;
