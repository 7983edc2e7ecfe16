//! Clue calculation for a guess against the secret word
//!
//! Each letter of the guess gets one mark:
//! - Correct: same letter in the same position
//! - Present: letter appears elsewhere in the secret
//! - Absent: letter does not appear in the secret
//!
//! Game words never repeat letters, so a single pass is enough.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Placeholder shown in the plain clue for absent letters
pub const ABSENT_PLACEHOLDER: char = '_';

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

/// Per-letter feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    guess: Word,
    marks: [Mark; WORD_LENGTH],
}

impl Clue {
    /// Compare `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::{Clue, Mark, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let clue = Clue::calculate(&guess, &secret);
    ///
    /// assert_eq!(clue.plain(), "__a_e");
    /// assert_eq!(clue.marks()[2], Mark::Correct);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *mark = if letter == secret.char_at(i) {
                Mark::Correct
            } else if secret.has_letter(letter) {
                Mark::Present
            } else {
                Mark::Absent
            };
        }

        Self {
            guess: guess.clone(),
            marks,
        }
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.marks
    }

    /// Letters paired with their marks, in guess order
    pub fn letters(&self) -> impl Iterator<Item = (u8, Mark)> + '_ {
        self.guess.chars().iter().copied().zip(self.marks)
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// Plain-text clue: known letters in lowercase, placeholder for absent ones
    #[must_use]
    pub fn plain(&self) -> String {
        self.letters()
            .map(|(letter, mark)| match mark {
                Mark::Absent => ABSENT_PLACEHOLDER,
                Mark::Correct | Mark::Present => char::from(letter),
            })
            .collect()
    }

    /// Guess letters that do not appear in the secret
    pub fn absent_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.letters()
            .filter(|&(_, mark)| mark == Mark::Absent)
            .map(|(letter, _)| letter)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(guess: &str, secret: &str) -> Clue {
        Clue::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn clue_all_absent() {
        let clue = clue("abcde", "fghij");

        assert_eq!(clue.marks(), &[Mark::Absent; 5]);
        assert_eq!(clue.plain(), "_____");
        assert!(!clue.is_solved());
    }

    #[test]
    fn clue_all_correct() {
        for word in ["crane", "slate", "audio", "brick", "fjord"] {
            let clue = clue(word, word);
            assert!(clue.is_solved(), "{word} against itself");
            assert_eq!(clue.plain(), word);
            assert_eq!(clue.absent_letters().count(), 0);
        }
    }

    #[test]
    fn clue_mixed_marks() {
        // C(absent) R(absent) A(correct) N(absent) E(correct)
        let clue = clue("crane", "slate");

        assert_eq!(
            clue.marks(),
            &[
                Mark::Absent,
                Mark::Absent,
                Mark::Correct,
                Mark::Absent,
                Mark::Correct
            ]
        );
        assert_eq!(clue.plain(), "__a_e");
        assert_eq!(clue.absent_letters().collect::<Vec<_>>(), b"crn");
    }

    #[test]
    fn clue_present_letters() {
        // Every letter of STALE is in SLATE; S, A and E line up
        let clue = clue("stale", "slate");

        assert_eq!(
            clue.marks(),
            &[
                Mark::Correct,
                Mark::Present,
                Mark::Correct,
                Mark::Present,
                Mark::Correct
            ]
        );
        assert_eq!(clue.plain(), "stale");
        assert!(!clue.is_solved());
    }

    #[test]
    fn clue_display_is_plain() {
        let clue = clue("brick", "crane");
        // B absent, R correct, I absent, C present, K absent
        assert_eq!(format!("{clue}"), "_r_c_");
    }
}
