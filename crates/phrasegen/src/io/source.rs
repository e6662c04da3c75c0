use std::fs;
use std::path::Path;

use log::info;

use super::error::LoadError;
use crate::parser::parse_dictionary_str;
use crate::types::Dictionary;

/// Read a UTF-8 text file as lines, without their `\n` or `\r\n` endings.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Read and parse a dictionary file.
///
/// ```ignore
/// let dict = phrasegen::io::load_dictionary("data/keywords/entities.txt")?;
/// ```
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;
    let dictionary = parse_dictionary_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "loaded {} tokens from '{}'",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
