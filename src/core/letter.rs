//! Letters and per-cell feedback statuses
//!
//! Both are closed sets, modeled as enums so matches at the input and
//! rendering boundaries stay exhaustive.

use std::fmt;

/// One of the 26 uppercase letters a cell can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// All letters in alphabetical order
    pub const ALL: [Self; 26] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Convert a character to a letter, case-insensitively
    ///
    /// Returns `None` for anything outside a-z / A-Z.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('w'), Some(Letter::W));
    /// assert_eq!(Letter::from_char('W'), Some(Letter::W));
    /// assert_eq!(Letter::from_char('3'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self::ALL[(upper as u8 - b'A') as usize])
        } else {
            None
        }
    }

    /// Get the uppercase character for this letter
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Feedback state of one board cell
///
/// A cell only carries a status while it holds a letter: `Unsubmitted`
/// before its row is scored, one of the other three afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    /// Letter typed but the row has not been submitted yet
    Unsubmitted,
    /// Letter matches the target at this position
    Correct,
    /// Letter appears in the target, but not at this position
    PartiallyCorrect,
    /// Letter does not appear in the target
    Incorrect,
}
