//! Core domain types for the Wordle game
//!
//! This module contains the game engine and its domain types with zero UI
//! dependencies. All state transitions happen here; everything else in the
//! crate only renders this module's read-only views and feeds it input.

mod board;
mod engine;
mod letter;
mod word;

pub use board::{Board, Cell, Guess, MAX_GUESSES};
pub use engine::{GameEngine, GameError, GameStatus};
pub use letter::{CellStatus, Letter};
pub use word::{WORD_LENGTH, Word, WordError};
