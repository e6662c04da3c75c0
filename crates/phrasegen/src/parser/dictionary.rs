//! Dictionary record parser.

use std::collections::HashMap;

use log::{debug, trace};
use winnow::combinator::{opt, preceded, separated, terminated};
use winnow::prelude::*;
use winnow::stream::Offset;
use winnow::token::take_till;

use super::error::ParseError;
use crate::types::{Candidate, Dictionary, DuplicateToken};

/// Characters that may not appear inside a token.
const TOKEN_DELIMITERS: [char; 3] = [' ', ',', '/'];

/// Parse dictionary lines into a [`Dictionary`].
///
/// Each line holds one record: `TOKEN:TEXT[/WEIGHT],TEXT[/WEIGHT],...`.
/// Candidate order follows the line; an entry without `/WEIGHT` gets weight
/// `1.0`. A single trailing `,` is accepted, so `TOKEN:` defines a token with
/// no candidates.
///
/// Fails on the first bad line; a dictionary is never partially returned.
///
/// # Example
///
/// ```
/// use phrasegen::parser::parse_dictionary;
///
/// let dict = parse_dictionary(["大:big/0.6,large/0.4", "猫:cat/0.9,kitten"]).unwrap();
/// assert_eq!(dict.len(), 2);
///
/// let cat = dict.get("猫").unwrap();
/// assert_eq!(cat[0].text(), "cat");
/// assert_eq!(cat[1].weight(), 1.0);
/// ```
pub fn parse_dictionary<I>(lines: I) -> Result<Dictionary, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut dictionary = Dictionary::new();
    let mut first_lines: HashMap<String, usize> = HashMap::new();
    let mut line_count = 0;

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        line_count = line_number;

        let line = line.as_ref();
        let (token, entries) = parse_token(line, line_number)?;
        if let Some(&first_line) = first_lines.get(token) {
            return Err(ParseError::DuplicateKey {
                token: token.to_string(),
                line: line_number,
                first_line,
            });
        }

        let candidates = parse_entries(line, entries, line_number)?;
        trace!(
            "line {line_number}: '{token}' with {} candidates",
            candidates.len()
        );

        dictionary
            .insert(token.to_string(), candidates)
            .map_err(|DuplicateToken { token }| ParseError::DuplicateKey {
                token,
                line: line_number,
                first_line: line_number,
            })?;
        first_lines.insert(token.to_string(), line_number);
    }

    if line_count == 0 {
        return Err(ParseError::EmptyInput);
    }

    debug!(
        "parsed dictionary: {} tokens, {} candidates",
        dictionary.len(),
        dictionary.candidate_count()
    );
    Ok(dictionary)
}

/// Parse a whole dictionary text, one record per line.
///
/// Both `\n` and `\r\n` line endings are accepted. A final line terminator
/// does not produce an extra empty record.
pub fn parse_dictionary_str(input: &str) -> Result<Dictionary, ParseError> {
    parse_dictionary(input.lines())
}

/// An entry as it appears in the line, before weight conversion.
struct RawEntry<'i> {
    text: &'i str,
    weight: Option<&'i str>,
}

impl RawEntry<'_> {
    /// Nothing between the surrounding commas.
    fn is_blank(&self) -> bool {
        self.text.is_empty() && self.weight.is_none()
    }
}

/// Split a record into its validated token and the text after the `:`.
fn parse_token(line: &str, line_number: usize) -> Result<(&str, &str), ParseError> {
    if line.is_empty() {
        return Err(malformed(line_number, 1, "empty line"));
    }

    let mut input = line;
    let Ok(token) = token_field(&mut input) else {
        return Err(malformed(
            line_number,
            line.len() + 1,
            "expected ':' after token",
        ));
    };
    validate_token(token, line_number)?;
    Ok((token, input))
}

/// Parse the candidate list that follows the `:` of `line`.
fn parse_entries(
    line: &str,
    mut input: &str,
    line_number: usize,
) -> Result<Vec<Candidate>, ParseError> {
    let mut raw_entries = match entry_list(&mut input) {
        Ok(entries) => entries,
        Err(e) => {
            return Err(malformed(
                line_number,
                column_of(line, input),
                format!("parse error: {e}"),
            ));
        }
    };
    if !input.is_empty() {
        return Err(malformed(
            line_number,
            column_of(line, input),
            format!(
                "unexpected character: '{}'",
                input.chars().next().unwrap_or('?')
            ),
        ));
    }

    // A trailing comma leaves one blank entry at the end.
    if raw_entries.last().is_some_and(RawEntry::is_blank) {
        raw_entries.pop();
    }

    raw_entries
        .into_iter()
        .map(|entry| to_candidate(&entry, line, line_number))
        .collect()
}

/// Parse the token and its terminating `:`.
///
/// The scan stops at end of line when no `:` is present.
fn token_field<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    terminated(take_till(0.., ':'), ':').parse_next(input)
}

/// Parse `ENTRY (',' ENTRY)*`.
fn entry_list<'i>(input: &mut &'i str) -> ModalResult<Vec<RawEntry<'i>>> {
    separated(0.., entry, ',').parse_next(input)
}

/// Parse `TEXT ['/' WEIGHT]`. Everything after the first `/` up to the next
/// `,` is weight text.
fn entry<'i>(input: &mut &'i str) -> ModalResult<RawEntry<'i>> {
    (
        take_till(0.., [',', '/']),
        opt(preceded('/', take_till(0.., ','))),
    )
        .map(|(text, weight)| RawEntry { text, weight })
        .parse_next(input)
}

fn validate_token(token: &str, line_number: usize) -> Result<(), ParseError> {
    if token.is_empty() {
        return Err(malformed(line_number, 1, "empty token"));
    }
    if let Some((index, c)) = token
        .char_indices()
        .find(|(_, c)| TOKEN_DELIMITERS.contains(c))
    {
        return Err(malformed(
            line_number,
            index + 1,
            format!("token contains delimiter '{c}'"),
        ));
    }
    Ok(())
}

fn to_candidate(
    entry: &RawEntry<'_>,
    line: &str,
    line_number: usize,
) -> Result<Candidate, ParseError> {
    if entry.is_blank() {
        return Err(malformed(
            line_number,
            column_of(line, entry.text),
            "empty entry",
        ));
    }

    let Some(raw_weight) = entry.weight else {
        return Ok(Candidate::unweighted(entry.text));
    };
    match parse_weight(raw_weight) {
        Some(weight) => Ok(Candidate::new(entry.text, weight)),
        None => Err(ParseError::InvalidWeight {
            line: line_number,
            column: column_of(line, raw_weight),
            value: raw_weight.to_string(),
        }),
    }
}

/// Convert weight text to a weight in `(0, 1]`.
///
/// `"1"` is taken as exactly `1.0` without going through float parsing.
/// Surrounding whitespace is ignored.
fn parse_weight(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw == "1" {
        return Some(1.0);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|weight| weight.is_finite() && *weight > 0.0 && *weight <= 1.0)
}

/// 1-based byte column of `fragment`, which must be a subslice of `line`.
fn column_of(line: &str, fragment: &str) -> usize {
    fragment.offset_from(&line) + 1
}

fn malformed(line: usize, column: usize, message: impl Into<String>) -> ParseError {
    ParseError::MalformedRecord {
        line,
        column,
        message: message.into(),
    }
}
