//! Integration tests for dictionary record parsing.

use phrasegen::parser::{ParseError, parse_dictionary, parse_dictionary_str};

#[test]
fn single_record_keeps_candidate_order() {
    let dict = parse_dictionary(["猫:cat/0.9,kitten/0.1"]).unwrap();
    let candidates = dict.get("猫").unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].text(), "cat");
    assert_eq!(candidates[0].weight(), 0.9);
    assert_eq!(candidates[1].text(), "kitten");
    assert_eq!(candidates[1].weight(), 0.1);
}

#[test]
fn weight_literal_one_is_exactly_one() {
    let dict = parse_dictionary(["好:good/1"]).unwrap();
    assert_eq!(dict.get("好").unwrap()[0].weight(), 1.0);
}

#[test]
fn omitted_weight_defaults_to_one() {
    let dict = parse_dictionary(["好:good,fine/0.5"]).unwrap();
    let candidates = dict.get("好").unwrap();
    assert_eq!(candidates[0].weight(), 1.0);
    assert_eq!(candidates[1].weight(), 0.5);
}

#[test]
fn tokens_keep_load_order() {
    let dict = parse_dictionary(["猫:cat", "大:big", "狗:dog"]).unwrap();
    let tokens: Vec<&str> = dict.tokens().collect();
    assert_eq!(tokens, ["猫", "大", "狗"]);
    assert_eq!(dict.len(), 3);
    assert_eq!(dict.candidate_count(), 3);
}

#[test]
fn accepts_owned_lines() {
    let lines = vec!["猫:cat".to_string(), "狗:dog".to_string()];
    let dict = parse_dictionary(&lines).unwrap();
    assert!(dict.contains("猫"));
    assert!(dict.contains("狗"));
}

#[test]
fn parse_str_handles_crlf_and_final_newline() {
    let dict = parse_dictionary_str("猫:cat/0.9\r\n狗:dog/0.8\r\n").unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get("狗").unwrap()[0].text(), "dog");
}

#[test]
fn trailing_comma_is_tolerated() {
    let dict = parse_dictionary(["猫:cat/0.9,kitten/0.1,"]).unwrap();
    assert_eq!(dict.get("猫").unwrap().len(), 2);
}

#[test]
fn token_without_entries_has_no_candidates() {
    let dict = parse_dictionary(["猫:"]).unwrap();
    assert_eq!(dict.get("猫"), Some(&[][..]));
}

#[test]
fn colon_inside_text_is_plain_text() {
    let dict = parse_dictionary(["时:12:00/0.5"]).unwrap();
    let candidate = &dict.get("时").unwrap()[0];
    assert_eq!(candidate.text(), "12:00");
    assert_eq!(candidate.weight(), 0.5);
}

#[test]
fn text_may_contain_spaces() {
    let dict = parse_dictionary(["你好:hello there/0.7"]).unwrap();
    assert_eq!(dict.get("你好").unwrap()[0].text(), "hello there");
}

#[test]
fn empty_text_with_weight_is_allowed() {
    let dict = parse_dictionary(["的:/0.5,of/0.5"]).unwrap();
    let candidates = dict.get("的").unwrap();
    assert_eq!(candidates[0].text(), "");
    assert_eq!(candidates[1].text(), "of");
}

#[test]
fn scientific_and_whitespace_weights() {
    let dict = parse_dictionary(["猫:cat/ 0.9 ,kitten/1e-1"]).unwrap();
    let candidates = dict.get("猫").unwrap();
    assert_eq!(candidates[0].weight(), 0.9);
    assert_eq!(candidates[1].weight(), 0.1);
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn empty_input_fails() {
    let lines: [&str; 0] = [];
    assert_eq!(parse_dictionary(lines).unwrap_err(), ParseError::EmptyInput);
    assert_eq!(parse_dictionary_str("").unwrap_err(), ParseError::EmptyInput);
}

#[test]
fn empty_line_fails() {
    let err = parse_dictionary(["猫:cat", "", "狗:dog"]).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedRecord {
            line: 2,
            column: 1,
            ..
        }
    ));
}

#[test]
fn line_without_colon_fails_without_overrunning() {
    let err = parse_dictionary(["猫cat"]).unwrap_err();
    match err {
        ParseError::MalformedRecord {
            line,
            column,
            message,
        } => {
            assert_eq!(line, 1);
            assert_eq!(column, "猫cat".len() + 1);
            assert!(message.contains("':'"));
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn empty_token_fails() {
    let err = parse_dictionary([":cat"]).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedRecord {
            line: 1,
            column: 1,
            ..
        }
    ));
}

#[test]
fn token_with_delimiter_fails() {
    for line in ["大 猫:big cat", "大,猫:x", "大/猫:x"] {
        let err = parse_dictionary([line]).unwrap_err();
        assert!(
            matches!(err, ParseError::MalformedRecord { column: 4, .. }),
            "{line}: {err:?}"
        );
    }
}

#[test]
fn empty_entry_between_commas_fails() {
    let err = parse_dictionary(["猫:cat,,kitten"]).unwrap_err();
    // 猫 is three bytes; the empty entry starts right after "猫:cat,".
    assert!(matches!(
        err,
        ParseError::MalformedRecord {
            line: 1,
            column: 9,
            ..
        }
    ));
}

#[test]
fn duplicate_token_fails_with_both_lines() {
    let err = parse_dictionary(["猫:cat", "狗:dog", "猫:kitten"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::DuplicateKey {
            token: "猫".to_string(),
            line: 3,
            first_line: 1,
        }
    );
}

#[test]
fn duplicate_reported_before_bad_entries() {
    let err = parse_dictionary(["猫:cat", "猫:x/abc"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::DuplicateKey {
            token: "猫".to_string(),
            line: 2,
            first_line: 1,
        }
    );
}

#[test]
fn non_numeric_weight_fails() {
    let err = parse_dictionary(["猫:cat/abc"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidWeight {
            line: 1,
            column: 9,
            value: "abc".to_string(),
        }
    );
}

#[test]
fn empty_weight_fails() {
    let err = parse_dictionary(["猫:cat/"]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidWeight { ref value, .. } if value.is_empty()));
}

#[test]
fn second_slash_makes_weight_invalid() {
    let err = parse_dictionary(["猫:cat/0.5/0.2"]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidWeight { ref value, .. } if value == "0.5/0.2"));
}

#[test]
fn out_of_range_weight_fails() {
    for weight in ["0", "-0.1", "1.01", "NaN", "inf"] {
        let line = format!("猫:cat/{weight}");
        let err = parse_dictionary([line.as_str()]).unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidWeight { .. }),
            "{weight}: {err:?}"
        );
    }
}

#[test]
fn first_error_wins() {
    let err = parse_dictionary(["猫:cat/x", "猫:dog"]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidWeight { line: 1, .. }));
}

#[test]
fn error_position() {
    assert_eq!(ParseError::EmptyInput.position(), None);
    let err = parse_dictionary(["猫:cat", "猫:dog"]).unwrap_err();
    assert_eq!(err.position(), Some((2, 1)));
}
