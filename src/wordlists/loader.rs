//! Word list loading and validation
//!
//! Lists are read whole, then every line is validated. A list with any
//! invalid entry is rejected as a unit.

use super::WordList;
use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Which of the two input files a list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Words,
    Candidates,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Words => f.write_str("words"),
            Self::Candidates => f.write_str("candidate words"),
        }
    }
}

/// Errors that keep the game from starting
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The {kind} file {} doesn't exist.", .path.display())]
    Missing {
        kind: ListKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{count} invalid words were found in the {} file.", .path.display())]
    InvalidWords { count: usize, path: PathBuf },

    #[error("The {kind} file {} contains no words.", .path.display())]
    Empty { kind: ListKind, path: PathBuf },

    #[error("{count} candidate words are not included in the {} file.", .words_path.display())]
    NotIncluded { count: usize, words_path: PathBuf },
}

/// Raw, unvalidated lines of a list file
#[derive(Debug, Clone)]
pub struct RawList {
    kind: ListKind,
    path: PathBuf,
    lines: Vec<String>,
}

impl RawList {
    /// Path the lines were read from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate every entry and build the list
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidWords` with the number of bad entries if
    /// any line is not a valid game word, or `LoadError::Empty` if the file
    /// had no entries at all.
    pub fn validate(self) -> Result<WordList, LoadError> {
        let (words, invalid): (Vec<_>, Vec<_>) =
            self.lines.iter().map(Word::new).partition(Result::is_ok);

        if !invalid.is_empty() {
            warn!(
                path = %self.path.display(),
                count = invalid.len(),
                "rejected word list"
            );
            return Err(LoadError::InvalidWords {
                count: invalid.len(),
                path: self.path,
            });
        }

        if words.is_empty() {
            return Err(LoadError::Empty {
                kind: self.kind,
                path: self.path,
            });
        }

        debug!(path = %self.path.display(), count = words.len(), "validated word list");
        Ok(WordList::new(words.into_iter().flatten().collect()))
    }
}

/// Read a list file into lines, exactly as written
///
/// # Errors
///
/// Returns `LoadError::Missing` if the file cannot be opened or read.
pub fn read_lines(path: impl AsRef<Path>, kind: ListKind) -> Result<RawList, LoadError> {
    let path = path.as_ref().to_path_buf();
    let content = fs::read_to_string(&path).map_err(|source| LoadError::Missing {
        kind,
        path: path.clone(),
        source,
    })?;

    let lines = content.lines().map(str::to_string).collect();

    Ok(RawList { kind, path, lines })
}

/// Read and validate a single list file
///
/// # Errors
///
/// Any `LoadError` from reading or validating the file.
///
/// # Examples
/// ```no_run
/// use words_virtuoso::wordlists::loader::{ListKind, load_from_file};
///
/// let words = load_from_file("words.txt", ListKind::Words).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file(path: impl AsRef<Path>, kind: ListKind) -> Result<WordList, LoadError> {
    read_lines(path, kind)?.validate()
}

/// Build a list from in-memory strings, rejecting it if any entry is invalid
///
/// # Errors
///
/// Returns `LoadError::InvalidWords` or `LoadError::Empty` like
/// [`RawList::validate`].
pub fn words_from_slice(slice: &[&str]) -> Result<WordList, LoadError> {
    RawList {
        kind: ListKind::Words,
        path: PathBuf::from("<memory>"),
        lines: slice.iter().map(|s| (*s).to_string()).collect(),
    }
    .validate()
}
