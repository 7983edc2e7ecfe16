//! Game word representation and validation
//!
//! A Word is five distinct Latin letters, stored lowercase, with a letter
//! bitmask for constant-time membership checks.

use std::fmt;
use thiserror::Error;

/// Number of letters in every game word
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter word with no repeated letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letters: u32,
}

/// Reasons a string is not a valid game word
///
/// The messages double as the feedback shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("The input isn't a 5-letter word.")]
    InvalidLength(usize),

    #[error("One or more letters of the input aren't valid.")]
    InvalidCharacters,

    #[error("The input has duplicate letters.")]
    DuplicateLetters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Checks run in order: length, alphabet, distinct letters. Case is
    /// ignored and the stored text is lowercase.
    ///
    /// # Errors
    /// Returns the first `WordError` the input violates.
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("crates").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// assert!(Word::new("geese").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        let mut letters = 0u32;
        for (slot, &ch) in chars.iter_mut().zip(text.as_bytes()) {
            let bit = letter_bit(ch);
            if letters & bit != 0 {
                return Err(WordError::DuplicateLetters);
            }
            letters |= bit;
            *slot = ch;
        }

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific lowercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letters & letter_bit(letter) != 0
    }
}

/// Check a string against the game word rules without keeping the result
#[must_use]
pub fn is_valid_word(text: &str) -> bool {
    Word::new(text).is_ok()
}

const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Five characters, six bytes
        assert_eq!(Word::new("crané"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_duplicate_letters() {
        assert_eq!(Word::new("apple"), Err(WordError::DuplicateLetters));
        assert_eq!(Word::new("aaaaa"), Err(WordError::DuplicateLetters));
        // Case-insensitive
        assert_eq!(Word::new("Crank"), Ok(Word::new("crank").unwrap()));
        assert_eq!(Word::new("CraCk"), Err(WordError::DuplicateLetters));
    }

    #[test]
    fn checks_run_in_order() {
        // Too long and repeated: length wins
        assert!(matches!(
            Word::new("aaaaaa"),
            Err(WordError::InvalidLength(6))
        ));
        // Bad character and repeated: alphabet wins
        assert_eq!(Word::new("aa1bc"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn every_distinct_five_letter_window_is_valid() {
        let alphabet = b"abcdefghijklmnopqrstuvwxyz";
        for window in alphabet.windows(WORD_LENGTH) {
            let text = std::str::from_utf8(window).unwrap();
            assert!(is_valid_word(text), "{text} should be valid");
        }
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(2), b'a');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'C'));
    }

    #[test]
    fn error_messages_are_player_feedback() {
        assert_eq!(
            WordError::InvalidLength(3).to_string(),
            "The input isn't a 5-letter word."
        );
        assert_eq!(
            WordError::InvalidCharacters.to_string(),
            "One or more letters of the input aren't valid."
        );
        assert_eq!(
            WordError::DuplicateLetters.to_string(),
            "The input has duplicate letters."
        );
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
