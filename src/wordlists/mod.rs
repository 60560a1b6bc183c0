//! Answer words for new games
//!
//! Provides the embedded answer list and random target selection. Only the
//! binary consults this; the engine itself never checks a word list.

mod embedded;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::Rng;

/// Pick a random target word for a new game
#[must_use]
pub fn random_answer() -> Word {
    let index = rand::rng().random_range(0..ANSWERS.len());
    Word::new(ANSWERS[index]).expect("embedded answers are validated 5-letter words")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, lowercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(ANSWERS_COUNT, 510, "Expected 510 answer words");
    }

    #[test]
    fn random_answer_parses() {
        // Smoke test: every draw must produce a valid word
        for _ in 0..20 {
            let word = random_answer();
            assert!(ANSWERS.contains(&word.to_string().to_lowercase().as_str()));
        }
    }
}
