//! Implementation of the `phrasegen check` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use phrasegen::io::load_dictionary;
use serde::Serialize;

use super::report_load_error;
use crate::output::table::{format_check_table, DictionarySummary};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Dictionary files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for a checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    tokens: Option<usize>,
    candidates: Option<usize>,
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut exit_code = exitcode::OK;
    let mut results: Vec<CheckJson> = Vec::new();

    for file in &args.files {
        let entry = match load_dictionary(file) {
            Ok(dictionary) => CheckJson {
                file: file.display().to_string(),
                tokens: Some(dictionary.len()),
                candidates: Some(dictionary.candidate_count()),
                error: None,
            },
            Err(e) => {
                let code = if args.json {
                    exitcode::DATAERR
                } else {
                    report_load_error(&e)
                };
                if exit_code == exitcode::OK {
                    exit_code = code;
                }
                CheckJson {
                    file: file.display().to_string(),
                    tokens: None,
                    candidates: None,
                    error: Some(e.to_string()),
                }
            }
        };
        results.push(entry);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    } else {
        let summaries: Vec<DictionarySummary> = results
            .into_iter()
            .map(|r| DictionarySummary {
                file: r.file,
                tokens: r.tokens,
                candidates: r.candidates,
            })
            .collect();
        println!("{}", format_check_table(&summaries));
    }

    Ok(exit_code)
}
