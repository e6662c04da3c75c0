//! CLI command implementations.

mod check;
mod expand;
mod translate;

pub use check::{run_check, CheckArgs};
pub use expand::{run_expand, ExpandArgs};
pub use translate::{run_translate, TranslateArgs};

use std::fs::read_to_string;
use std::path::Path;

use log::debug;
use miette::{miette, Report};
use phrasegen::io::{load_dictionary, LoadError};
use phrasegen::Dictionary;

use crate::output::PhrasegenDiagnostic;

/// Load a dictionary file, printing a diagnostic on failure.
///
/// The error value is the exit code to terminate with.
fn load_dictionary_or_report(path: &Path) -> Result<Dictionary, i32> {
    debug!("loading dictionary {}", path.display());
    load_dictionary(path).map_err(|err| report_load_error(&err))
}

/// Print a load error to stderr and return the matching exit code.
fn report_load_error(err: &LoadError) -> i32 {
    match err {
        LoadError::Io { .. } => {
            eprintln!("{:?}", miette!("{err}"));
            exitcode::IOERR
        }
        LoadError::Parse { path, source } => {
            let content = read_to_string(path).unwrap_or_default();
            let diagnostic = PhrasegenDiagnostic::from_parse_error(path, &content, source);
            eprintln!("{:?}", Report::new(diagnostic));
            exitcode::DATAERR
        }
    }
}
