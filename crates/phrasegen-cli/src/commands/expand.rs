//! Implementation of the `phrasegen expand` command.

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use phrasegen::{rank, tokenize, TranslateError, TranslationResult, Translator};
use serde::Serialize;

use super::load_dictionary_or_report;
use crate::output::table::format_results_table;
use crate::output::PhrasegenDiagnostic;

/// Arguments for the expand command.
#[derive(Debug, clap::Args)]
pub struct ExpandArgs {
    /// Dictionary file, one `TOKEN:text/weight,...` record per line
    #[arg(short, long)]
    pub dictionary: PathBuf,

    /// Phrase to expand, tokens separated by single spaces
    pub phrase: String,

    /// Keep generation order instead of ranking by weight
    #[arg(long)]
    pub unranked: bool,

    /// Refuse the phrase if it expands to more than this many translations
    #[arg(long, env = "PHRASEGEN_MAX_COMBINATIONS")]
    pub max_combinations: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for expand results.
#[derive(Serialize)]
struct ExpandJson<'a> {
    phrase: &'a str,
    tokens: &'a [String],
    results: &'a [TranslationResult],
}

/// Run the expand command.
pub fn run_expand(args: ExpandArgs) -> miette::Result<i32> {
    let dictionary = match load_dictionary_or_report(&args.dictionary) {
        Ok(dictionary) => dictionary,
        Err(code) => return Ok(code),
    };
    let translator = Translator::builder()
        .dictionary(dictionary)
        .maybe_max_combinations(args.max_combinations)
        .build();

    let phrase = match tokenize(&args.phrase) {
        Ok(phrase) => phrase,
        Err(e) => {
            eprintln!("Invalid phrase: {e}");
            return Ok(exitcode::USAGE);
        }
    };

    let results = match translator.translate_phrase(&phrase) {
        Ok(results) => results,
        Err(source) => {
            let err = TranslateError::Expand { line: 1, source };
            let diagnostic =
                PhrasegenDiagnostic::from_translate_error(Path::new("<phrase>"), &args.phrase, &err);
            eprintln!("{:?}", miette::Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };
    let results = if args.unranked {
        results
    } else {
        rank(results)
    };

    if args.json {
        let output = ExpandJson {
            phrase: &args.phrase,
            tokens: phrase.tokens(),
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", format_results_table(&results));
    }

    Ok(exitcode::OK)
}
