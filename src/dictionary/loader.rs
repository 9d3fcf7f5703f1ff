//! Dictionary loading utilities
//!
//! Builds a [`Dictionary`] from a newline-delimited file or from the embedded list.

use super::{DICTIONARY, Dictionary};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Dictionary {} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Load a dictionary from a newline-delimited word file
///
/// Blank lines and surrounding whitespace are ignored.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::Empty` if it contains no words.
///
/// # Examples
/// ```no_run
/// use ruzzle_solver::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dict = Dictionary::new(content.lines());
    if dict.is_empty() {
        return Err(DictionaryError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::info!(
        path = %path.display(),
        words = dict.len(),
        prefixes = dict.prefix_count(),
        "loaded dictionary"
    );
    Ok(dict)
}

/// Build a dictionary from a string slice
///
/// # Examples
/// ```
/// use ruzzle_solver::dictionary::loader::from_slice;
///
/// let dict = from_slice(&["cat", "at"]);
/// assert_eq!(dict.len(), 2);
/// ```
#[must_use]
pub fn from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::new(slice.iter().copied())
}

/// Build a dictionary from the word list compiled into the binary
#[must_use]
pub fn embedded() -> Dictionary {
    let dict = from_slice(DICTIONARY);
    tracing::info!(
        words = dict.len(),
        prefixes = dict.prefix_count(),
        "loaded embedded dictionary"
    );
    dict
}
