//! Integration tests for the file collaborators.

use std::fs;
use std::io::Write;

use phrasegen::io::{
    LoadError, PairedFileSink, ResultSink, WriterSink, format_weight, load_dictionary, read_lines,
};
use phrasegen::parser::ParseError;
use phrasegen::{TranslationResult, Translator};
use tempfile::{NamedTempFile, tempdir};

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn format_weight_keeps_fraction() {
    assert_eq!(format_weight(1.0), "1.0");
    assert_eq!(format_weight(0.54), "0.54");
    assert_eq!(format_weight(0.6 * 0.1), "0.06");
}

#[test]
fn format_weight_avoids_exponent_notation() {
    assert_eq!(format_weight(1e-5), "0.00001");

    let product = 1.0 * 0.01 * 0.01 * 0.01;
    let text = format_weight(product);
    assert_eq!(text, "0.0000010000000000000002");
    assert_eq!(text.parse::<f64>().unwrap(), product);
}

#[test]
fn read_lines_strips_endings() {
    let file = temp_file("大 猫\r\n猫\n");
    assert_eq!(read_lines(file.path()).unwrap(), ["大 猫", "猫"]);
}

#[test]
fn read_lines_missing_file() {
    let dir = tempdir().unwrap();
    let err = read_lines(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn load_dictionary_from_file() {
    let file = temp_file("大:big/0.6,large/0.4\n猫:cat/0.9,kitten/0.1\n");
    let dict = load_dictionary(file.path()).unwrap();
    assert_eq!(dict.len(), 2);
}

#[test]
fn load_dictionary_reports_parse_error_with_path() {
    let file = temp_file("猫:cat\n猫:kitten\n");
    match load_dictionary(file.path()).unwrap_err() {
        LoadError::Parse { path, source } => {
            assert_eq!(path, file.path());
            assert!(matches!(source, ParseError::DuplicateKey { line: 2, .. }));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn paired_sink_writes_aligned_files() {
    let dir = tempdir().unwrap();
    let words = dir.path().join("candidateWords.txt");
    let weights = dir.path().join("candidatePossibilities.txt");

    let mut sink = PairedFileSink::new(&words, &weights);
    sink.write_results(&[
        TranslationResult::new("big cat", 0.54),
        TranslationResult::new("large cat", 0.36),
        TranslationResult::new("cat", 1.0),
    ])
    .unwrap();

    assert_eq!(sink.words_path(), words);
    assert_eq!(
        fs::read_to_string(&words).unwrap(),
        "big cat\nlarge cat\ncat\n"
    );
    assert_eq!(fs::read_to_string(&weights).unwrap(), "0.54\n0.36\n1.0\n");
}

#[test]
fn paired_sink_reports_unwritable_path() {
    let dir = tempdir().unwrap();
    let words = dir.path().join("no_such_dir").join("words.txt");
    let mut sink = PairedFileSink::new(words, dir.path().join("weights.txt"));
    assert!(sink.write_results(&[]).is_err());
}

#[test]
fn paired_sink_leaves_no_words_file_when_weights_unwritable() {
    let dir = tempdir().unwrap();
    let words = dir.path().join("words.txt");
    let weights = dir.path().join("missing").join("weights.txt");

    let mut sink = PairedFileSink::new(&words, &weights);
    let err = sink
        .write_results(&[TranslationResult::new("cat", 0.9)])
        .unwrap_err();

    assert!(err.to_string().contains("weights.txt"));
    assert!(!words.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn writer_sink_writes_tab_separated_lines() {
    let mut sink = WriterSink::new(Vec::new());
    sink.write_results(&[TranslationResult::new("cat", 0.9)])
        .unwrap();
    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(output, "cat\t0.9\n");
}

#[test]
fn full_pipeline_through_files() {
    let entities = temp_file("大:big/0.6,large/0.4\n猫:cat/0.9,kitten/0.1\n");
    let intents = temp_file("大 猫\n猫\n");
    let dir = tempdir().unwrap();
    let words = dir.path().join("words.txt");
    let weights = dir.path().join("weights.txt");

    let translator = Translator::new(load_dictionary(entities.path()).unwrap());
    let ranked = translator
        .translate_lines(read_lines(intents.path()).unwrap())
        .unwrap();
    PairedFileSink::new(&words, &weights)
        .write_results(&ranked)
        .unwrap();

    let written = fs::read_to_string(&words).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        [
            "cat",
            "big cat",
            "large cat",
            "kitten",
            "big kitten",
            "large kitten"
        ]
    );
    assert_eq!(fs::read_to_string(&weights).unwrap().lines().count(), 6);
}
