use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use tempfile::NamedTempFile;

use super::error::SinkError;
use crate::types::TranslationResult;

/// Destination for a ranked result list.
pub trait ResultSink {
    /// Persist `results` in the given order.
    fn write_results(&mut self, results: &[TranslationResult]) -> Result<(), SinkError>;
}

/// Format a weight as decimal text.
///
/// Uses the shortest text that parses back to the same `f64`, never in
/// exponent notation and always with a fractional part: `1.0`, `0.54`,
/// `0.36000000000000004`, `0.00001`.
pub fn format_weight(weight: f64) -> String {
    let text = weight.to_string();
    if text.contains('.') || !weight.is_finite() {
        text
    } else {
        text + ".0"
    }
}

/// Writes translations and weights to two separate files, one entry per
/// line, so that line `n` of each file describes the same result.
///
/// Both files are written to temporary files next to their targets and only
/// renamed into place once both writes succeeded, so a failing weights path
/// never leaves a words file behind.
#[derive(Debug, Clone)]
pub struct PairedFileSink {
    words: PathBuf,
    weights: PathBuf,
}

impl PairedFileSink {
    pub fn new(words: impl Into<PathBuf>, weights: impl Into<PathBuf>) -> Self {
        Self {
            words: words.into(),
            weights: weights.into(),
        }
    }

    pub fn words_path(&self) -> &Path {
        &self.words
    }

    pub fn weights_path(&self) -> &Path {
        &self.weights
    }
}

impl ResultSink for PairedFileSink {
    fn write_results(&mut self, results: &[TranslationResult]) -> Result<(), SinkError> {
        let words = stage_file(&self.words, results.iter().map(|r| r.text.clone()))?;
        let weights = stage_file(
            &self.weights,
            results.iter().map(|r| format_weight(r.weight)),
        )?;

        commit(words, &self.words)?;
        if let Err(e) = commit(weights, &self.weights) {
            if let Err(remove) = fs::remove_file(&self.words) {
                warn!("could not remove '{}': {remove}", self.words.display());
            }
            return Err(e);
        }

        info!(
            "wrote {} results to '{}' and '{}'",
            results.len(),
            self.words.display(),
            self.weights.display()
        );
        Ok(())
    }
}

/// Write `lines` to a temporary file in the directory of `path`.
fn stage_file(
    path: &Path,
    lines: impl Iterator<Item = String>,
) -> Result<NamedTempFile, SinkError> {
    let to_error = |source: io::Error| sink_error(path, source);
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(to_error)?;
    let mut writer = BufWriter::new(&temp_file);
    for line in lines {
        writeln!(writer, "{line}").map_err(to_error)?;
    }
    writer.flush().map_err(to_error)?;
    drop(writer);
    Ok(temp_file)
}

/// Atomically rename a staged file onto `path`.
fn commit(temp_file: NamedTempFile, path: &Path) -> Result<(), SinkError> {
    temp_file
        .persist(path)
        .map(drop)
        .map_err(|e| sink_error(path, e.error))
}

fn sink_error(path: &Path, source: io::Error) -> SinkError {
    SinkError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes `text<TAB>weight` lines to any writer.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_all(&mut self, results: &[TranslationResult]) -> io::Result<()> {
        for result in results {
            writeln!(self.writer, "{}\t{}", result.text, format_weight(result.weight))?;
        }
        self.writer.flush()
    }
}

impl<W: Write> ResultSink for WriterSink<W> {
    fn write_results(&mut self, results: &[TranslationResult]) -> Result<(), SinkError> {
        self.write_all(results).map_err(|source| SinkError::Io {
            path: PathBuf::from("<writer>"),
            source,
        })
    }
}
