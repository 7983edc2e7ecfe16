//! Word lists for the game
//!
//! The guessable word list and the candidate list the secret is drawn from.

pub mod loader;

use crate::core::Word;
use loader::{ListKind, LoadError, read_lines};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::info;

/// An ordered list of validated words with fast membership checks
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Number of distinct words in `self` that are missing from `other`
    #[must_use]
    pub fn count_not_in(&self, other: &Self) -> usize {
        self.index.iter().filter(|w| !other.contains(w)).count()
    }

    /// Pick one word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

/// Both validated lists, ready for a game
#[derive(Debug, Clone)]
pub struct GameLists {
    pub words: WordList,
    pub candidates: WordList,
}

impl GameLists {
    /// Load and cross-check the words and candidates files
    ///
    /// Checks run in order: both files readable, words valid, candidates
    /// valid, candidates contained in words.
    ///
    /// # Errors
    ///
    /// Returns the first `LoadError` encountered.
    pub fn load(
        words_path: impl AsRef<Path>,
        candidates_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let raw_words = read_lines(words_path, ListKind::Words)?;
        let raw_candidates = read_lines(candidates_path, ListKind::Candidates)?;

        let words_path = raw_words.path().to_path_buf();
        let words = raw_words.validate()?;
        let candidates = raw_candidates.validate()?;

        let excluded = candidates.count_not_in(&words);
        if excluded > 0 {
            return Err(LoadError::NotIncluded {
                count: excluded,
                words_path,
            });
        }

        info!(
            words = words.len(),
            candidates = candidates.len(),
            "word lists ready"
        );
        Ok(Self { words, candidates })
    }
}
