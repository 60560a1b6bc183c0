//! Five-letter word representation
//!
//! A `Word` is the validated form of a target word: exactly five letters,
//! normalized to uppercase at construction.

use super::Letter;
use std::fmt;

/// Number of letters in a word, and so cells in a guess row
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([Letter; WORD_LENGTH]);

/// Error type for invalid words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacter(c) => write!(f, "Word contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, case-insensitively
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly 5 letters or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("cran3").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let mut letters = [Letter::A; WORD_LENGTH];
        for (i, c) in text.chars().enumerate() {
            letters[i] = Letter::from_char(c).ok_or(WordError::InvalidCharacter(c))?;
        }

        Ok(Self(letters))
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.0[position]
    }

    /// Check whether the word contains a letter at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
