//! The 6×5 game board
//!
//! `Cell`, `Guess` and `Board` are plain data owned by the engine. Outside
//! this crate they are read-only; every mutator is `pub(crate)` so state can
//! only change through the engine's operations.

use super::letter::{CellStatus, Letter};
use super::word::WORD_LENGTH;

/// Number of guess rows on a board
pub const MAX_GUESSES: usize = 6;

/// One letter slot within a guess row
///
/// A cell with no letter has no status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<Letter>,
    status: Option<CellStatus>,
}

impl Cell {
    /// Get the letter, if one has been typed
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<Letter> {
        self.letter
    }

    /// Get the feedback status, if the cell holds a letter
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Option<CellStatus> {
        self.status
    }

    /// Check whether the cell is unfilled
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    pub(crate) fn fill(&mut self, letter: Letter) {
        self.letter = Some(letter);
        self.status = Some(CellStatus::Unsubmitted);
    }

    pub(crate) fn clear(&mut self) {
        self.letter = None;
        self.status = None;
    }

    pub(crate) fn set_status(&mut self, status: CellStatus) {
        self.status = Some(status);
    }
}

/// One guess row: exactly 5 cells, created empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Guess {
    cells: [Cell; WORD_LENGTH],
}

impl Guess {
    /// Get the cells of this row, left to right
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }
}

/// The full board: exactly 6 guess rows, created empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    guesses: [Guess; MAX_GUESSES],
}

impl Board {
    /// Get all guess rows, top to bottom
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &[Guess; MAX_GUESSES] {
        &self.guesses
    }

    /// Get one guess row (0-5)
    ///
    /// # Panics
    /// Panics if row >= 6
    #[inline]
    #[must_use]
    pub const fn guess(&self, row: usize) -> &Guess {
        &self.guesses[row]
    }

    pub(crate) fn cell_mut(&mut self, row: usize, position: usize) -> &mut Cell {
        &mut self.guesses[row].cells[position]
    }
}
