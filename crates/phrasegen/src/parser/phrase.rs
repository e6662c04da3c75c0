//! Target-phrase tokenizer.

use super::error::ParseError;
use crate::types::TargetPhrase;

/// Split a phrase line into tokens on the space character.
///
/// Every run of characters between spaces becomes a token, including empty
/// runs. The piece after the last space is always kept, so a line ending in
/// a space yields a trailing empty token; callers must tolerate it.
///
/// # Example
///
/// ```
/// use phrasegen::parser::tokenize;
///
/// let phrase = tokenize("大 猫").unwrap();
/// assert_eq!(phrase.tokens(), ["大", "猫"]);
///
/// let trailing = tokenize("大 ").unwrap();
/// assert_eq!(trailing.tokens(), ["大", ""]);
/// ```
pub fn tokenize(line: &str) -> Result<TargetPhrase, ParseError> {
    if line.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // Pieces equal to a single space are never tokens.
    Ok(line.split(' ').filter(|piece| *piece != " ").collect())
}
