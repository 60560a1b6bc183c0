//! Wordle Game
//!
//! A single-player Wordle for the terminal. The rules live in [`core`]; the
//! TUI in [`interactive`] is a thin layer that feeds key presses into the
//! engine and renders its board.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameEngine, GameStatus, Letter, Word};
//!
//! let mut game = GameEngine::new(Word::new("crane").unwrap());
//!
//! for c in "crane".chars() {
//!     game.add_letter(Letter::from_char(c).unwrap()).unwrap();
//! }
//! game.submit_guess().unwrap();
//!
//! assert_eq!(game.status(), GameStatus::PlayerWins);
//! ```

// Game rules and state machine
pub mod core;

// Interactive TUI interface
pub mod interactive;

// Embedded answer words
pub mod wordlists;
