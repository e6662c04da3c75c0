//! Implementation of the `phrasegen translate` command.

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use phrasegen::io::{read_lines, PairedFileSink, ResultSink, WriterSink};
use phrasegen::{TranslationResult, Translator};
use serde::Serialize;

use super::{load_dictionary_or_report, report_load_error};
use crate::output::table::format_results_table;
use crate::output::PhrasegenDiagnostic;

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Dictionary file, one `TOKEN:text/weight,...` record per line
    #[arg(short, long)]
    pub dictionary: PathBuf,

    /// Phrase file, one phrase of space-separated tokens per line
    #[arg(short, long)]
    pub phrases: PathBuf,

    /// Write ranked translations to this file, one per line
    #[arg(long, requires = "weights_out")]
    pub words_out: Option<PathBuf>,

    /// Write the weights of the ranked translations to this file
    #[arg(long, requires = "words_out")]
    pub weights_out: Option<PathBuf>,

    /// Refuse phrases that expand to more than this many translations
    #[arg(long, env = "PHRASEGEN_MAX_COMBINATIONS")]
    pub max_combinations: Option<u64>,

    /// Print at most this many translations (files always get all of them)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long, conflicts_with = "tsv")]
    pub json: bool,

    /// Output `text<TAB>weight` lines without a table
    #[arg(long)]
    pub tsv: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
struct TranslateJson<'a> {
    phrases: usize,
    total: usize,
    results: &'a [TranslationResult],
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> miette::Result<i32> {
    let dictionary = match load_dictionary_or_report(&args.dictionary) {
        Ok(dictionary) => dictionary,
        Err(code) => return Ok(code),
    };
    let lines = match read_lines(&args.phrases) {
        Ok(lines) => lines,
        Err(e) => return Ok(report_load_error(&e)),
    };

    let translator = Translator::builder()
        .dictionary(dictionary)
        .maybe_max_combinations(args.max_combinations)
        .build();

    let ranked = match translator.translate_lines(&lines) {
        Ok(ranked) => ranked,
        Err(e) => {
            let content = lines.join("\n");
            let diagnostic = PhrasegenDiagnostic::from_translate_error(&args.phrases, &content, &e);
            eprintln!("{:?}", miette::Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };

    if let (Some(words), Some(weights)) = (&args.words_out, &args.weights_out) {
        let mut sink = PairedFileSink::new(words, weights);
        if let Err(e) = sink.write_results(&ranked) {
            eprintln!("{:?}", miette::miette!("{e}"));
            return Ok(exitcode::IOERR);
        }
        print_summary(ranked.len(), words, weights);
        return Ok(exitcode::OK);
    }

    let shown = &ranked[..args.limit.unwrap_or(ranked.len()).min(ranked.len())];
    if args.json {
        let output = TranslateJson {
            phrases: lines.len(),
            total: ranked.len(),
            results: shown,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if args.tsv {
        let mut sink = WriterSink::new(std::io::stdout().lock());
        if let Err(e) = sink.write_results(shown) {
            eprintln!("{:?}", miette::miette!("{e}"));
            return Ok(exitcode::IOERR);
        }
    } else {
        println!("{}", format_results_table(shown));
        if shown.len() < ranked.len() {
            println!("... {} more", ranked.len() - shown.len());
        }
    }

    Ok(exitcode::OK)
}

fn print_summary(count: usize, words: &Path, weights: &Path) {
    println!(
        "{} {count} translations to {} and {}",
        "Wrote".if_supports_color(Stream::Stdout, |t| t.green()),
        words.display(),
        weights.display()
    );
}
