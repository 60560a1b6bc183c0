//! The game state machine
//!
//! `GameEngine` owns the board and enforces the rules of one game: letters
//! are typed into the current row, the row is scored on submission, and the
//! game ends on a full match or after the sixth scored row. Once the status
//! leaves `InProgress`, every mutating operation fails with
//! [`GameError::GameOver`] and the board stays frozen.

use super::board::{Board, MAX_GUESSES};
use super::letter::{CellStatus, Letter};
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Overall state of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWins,
    PlayerLoses,
}

/// Error type for rejected operations
///
/// All variants are recoverable: the engine's state is unchanged after any
/// of them, and the message is meant to be shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation attempted after the game ended. Carries the win
    /// acknowledgment or, on a loss, the revealed target word.
    GameOver(String),
    /// Letter added to a row that already holds 5 letters
    RowFull,
    /// Letter removed from a row that holds no letters
    RowEmpty,
    /// Row submitted with fewer than 5 letters
    IncompleteRow,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver(message) => write!(f, "{message}"),
            Self::RowFull => write!(f, "Too many letters"),
            Self::RowEmpty => write!(f, "No letters to delete"),
            Self::IncompleteRow => write!(f, "Not enough letters to submit"),
        }
    }
}

impl std::error::Error for GameError {}

/// State machine for one Wordle game
///
/// Created with a fixed target word; mutated only through [`add_letter`],
/// [`remove_last_letter`] and [`submit_guess`]; read through [`board`] and
/// [`status`].
///
/// # Examples
/// ```
/// use wordle_game::core::{GameEngine, GameStatus, Letter, Word};
///
/// let mut game = GameEngine::new(Word::new("crane").unwrap());
/// for c in "crane".chars() {
///     game.add_letter(Letter::from_char(c).unwrap()).unwrap();
/// }
/// game.submit_guess().unwrap();
/// assert_eq!(game.status(), GameStatus::PlayerWins);
/// ```
///
/// [`add_letter`]: GameEngine::add_letter
/// [`remove_last_letter`]: GameEngine::remove_last_letter
/// [`submit_guess`]: GameEngine::submit_guess
/// [`board`]: GameEngine::board
/// [`status`]: GameEngine::status
#[derive(Debug, Clone)]
pub struct GameEngine {
    target: Word,
    board: Board,
    status: GameStatus,
    current_guess: usize,
    current_cell: usize,
}

impl GameEngine {
    /// Start a new game with the given target word
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            board: Board::default(),
            status: GameStatus::InProgress,
            current_guess: 0,
            current_cell: 0,
        }
    }

    /// Get a read-only view of the board
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Get the current game status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Type a letter into the next cell of the current row
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the game has ended
    /// - [`GameError::RowFull`] if the current row already holds 5 letters
    pub fn add_letter(&mut self, letter: Letter) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if self.current_cell == WORD_LENGTH {
            return Err(GameError::RowFull);
        }

        self.board
            .cell_mut(self.current_guess, self.current_cell)
            .fill(letter);
        self.current_cell += 1;
        Ok(())
    }

    /// Erase the most recently typed letter of the current row
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the game has ended
    /// - [`GameError::RowEmpty`] if the current row holds no letters
    pub fn remove_last_letter(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if self.current_cell == 0 {
            return Err(GameError::RowEmpty);
        }

        self.current_cell -= 1;
        self.board
            .cell_mut(self.current_guess, self.current_cell)
            .clear();
        Ok(())
    }

    /// Score the current row and advance the game
    ///
    /// Each cell is marked `Correct` on a positional match, otherwise
    /// `PartiallyCorrect` if its letter appears anywhere in the target, and
    /// `Incorrect` if it does not. The membership test is deliberately
    /// count-blind: a duplicated guess letter can earn more partial marks
    /// than the target holds copies of that letter.
    ///
    /// A full match ends the game as a win; a miss on the sixth row ends it
    /// as a loss. The revealed target is returned only when this call loses
    /// the game; a win is observed via [`GameEngine::status`].
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the game has ended
    /// - [`GameError::IncompleteRow`] if the current row holds fewer than 5
    ///   letters
    pub fn submit_guess(&mut self) -> Result<Option<Word>, GameError> {
        self.ensure_in_progress()?;
        if self.current_cell < WORD_LENGTH {
            return Err(GameError::IncompleteRow);
        }

        let mut all_correct = true;
        for position in 0..WORD_LENGTH {
            let guessed = self.board.guess(self.current_guess).cells()[position]
                .letter()
                .expect("row verified full before scoring");

            let status = if guessed == self.target.letter_at(position) {
                CellStatus::Correct
            } else if self.target.contains(guessed) {
                CellStatus::PartiallyCorrect
            } else {
                CellStatus::Incorrect
            };

            all_correct &= status == CellStatus::Correct;
            self.board
                .cell_mut(self.current_guess, position)
                .set_status(status);
        }

        if all_correct {
            self.status = GameStatus::PlayerWins;
        } else if self.current_guess == MAX_GUESSES - 1 {
            self.status = GameStatus::PlayerLoses;
        }

        // Advancing past the last row is fine: a terminal status blocks
        // every further mutation.
        self.current_cell = 0;
        self.current_guess += 1;

        Ok(match self.status {
            GameStatus::PlayerLoses => Some(self.target),
            GameStatus::InProgress | GameStatus::PlayerWins => None,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::PlayerWins => Err(GameError::GameOver("You Win!".to_string())),
            GameStatus::PlayerLoses => Err(GameError::GameOver(self.target.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::board::Cell;
    use super::*;

    fn engine(target: &str) -> GameEngine {
        GameEngine::new(Word::new(target).unwrap())
    }

    fn type_word(game: &mut GameEngine, word: &str) {
        for c in word.chars() {
            game.add_letter(Letter::from_char(c).unwrap()).unwrap();
        }
    }

    fn row_statuses(game: &GameEngine, row: usize) -> Vec<Option<CellStatus>> {
        game.board.guess(row).cells().iter().map(Cell::status).collect()
    }

    #[test]
    fn new_game_has_empty_board_and_is_in_progress() {
        let game = engine("wwcsd");
        assert_eq!(game.status(), GameStatus::InProgress);
        for guess in game.board().guesses() {
            for cell in guess.cells() {
                assert_eq!(cell.letter(), None);
                assert_eq!(cell.status(), None);
            }
        }
    }

    #[test]
    fn add_letter_fills_left_to_right_as_unsubmitted() {
        let mut game = engine("wwcsd");
        game.add_letter(Letter::H).unwrap();
        game.add_letter(Letter::E).unwrap();

        let cells = game.board().guess(0).cells();
        assert_eq!(cells[0].letter(), Some(Letter::H));
        assert_eq!(cells[0].status(), Some(CellStatus::Unsubmitted));
        assert_eq!(cells[1].letter(), Some(Letter::E));
        assert_eq!(cells[1].status(), Some(CellStatus::Unsubmitted));
        assert!(cells[2].is_empty());
    }

    #[test]
    fn remove_letter_inverts_add() {
        let mut game = engine("wwcsd");
        let before = *game.board();

        game.add_letter(Letter::X).unwrap();
        game.remove_last_letter().unwrap();

        assert_eq!(*game.board(), before);

        // And the next add lands in the freed cell
        game.add_letter(Letter::Y).unwrap();
        assert_eq!(game.board().guess(0).cells()[0].letter(), Some(Letter::Y));
    }

    #[test]
    fn sixth_letter_in_a_row_is_rejected() {
        let mut game = engine("wwcsd");
        type_word(&mut game, "hello");
        let before = *game.board();

        assert_eq!(game.add_letter(Letter::X), Err(GameError::RowFull));
        assert_eq!(*game.board(), before);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn removing_from_empty_row_is_rejected() {
        let mut game = engine("wwcsd");
        let before = *game.board();

        assert_eq!(game.remove_last_letter(), Err(GameError::RowEmpty));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn submitting_short_row_is_rejected() {
        let mut game = engine("wwcsd");
        type_word(&mut game, "hell");
        let before = *game.board();

        assert_eq!(game.submit_guess(), Err(GameError::IncompleteRow));
        assert_eq!(*game.board(), before);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn feedback_marks_position_membership_and_absence() {
        let mut game = engine("wwcsd");
        type_word(&mut game, "wwcde");
        assert_eq!(game.submit_guess().unwrap(), None);

        assert_eq!(
            row_statuses(&game, 0),
            vec![
                Some(CellStatus::Correct),
                Some(CellStatus::Correct),
                Some(CellStatus::Correct),
                Some(CellStatus::PartiallyCorrect),
                Some(CellStatus::Incorrect),
            ]
        );
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn duplicate_letters_are_marked_by_plain_membership() {
        // Intended behavior, not an oversight: the partial mark does not
        // budget for target letter counts, so guessing WWWWW against WWCSD
        // earns three partial marks even though only two Ws exist.
        let mut game = engine("wwcsd");
        type_word(&mut game, "wwwww");
        game.submit_guess().unwrap();

        assert_eq!(
            row_statuses(&game, 0),
            vec![
                Some(CellStatus::Correct),
                Some(CellStatus::Correct),
                Some(CellStatus::PartiallyCorrect),
                Some(CellStatus::PartiallyCorrect),
                Some(CellStatus::PartiallyCorrect),
            ]
        );
    }

    #[test]
    fn full_match_wins_the_game() {
        let mut game = engine("wwcsd");
        type_word(&mut game, "wwcsd");

        // The win is observed via status, not the return value
        assert_eq!(game.submit_guess().unwrap(), None);
        assert_eq!(game.status(), GameStatus::PlayerWins);
        assert!(
            row_statuses(&game, 0)
                .iter()
                .all(|s| *s == Some(CellStatus::Correct))
        );
    }

    #[test]
    fn six_misses_lose_the_game_and_reveal_the_target() {
        let mut game = engine("wwcsd");

        for row in 0..5 {
            type_word(&mut game, "hello");
            assert_eq!(game.submit_guess().unwrap(), None);
            assert_eq!(game.status(), GameStatus::InProgress);
            assert!(
                row_statuses(&game, row)
                    .iter()
                    .all(|s| *s == Some(CellStatus::Incorrect))
            );
        }

        type_word(&mut game, "hello");
        let revealed = game.submit_guess().unwrap();
        assert_eq!(revealed, Some(Word::new("wwcsd").unwrap()));
        assert_eq!(game.status(), GameStatus::PlayerLoses);
        assert!(
            row_statuses(&game, 5)
                .iter()
                .all(|s| *s == Some(CellStatus::Incorrect))
        );
    }

    #[test]
    fn win_in_any_row_is_possible() {
        let mut game = engine("wwcsd");
        for _ in 0..5 {
            type_word(&mut game, "hello");
            game.submit_guess().unwrap();
        }

        // Sixth and last row
        type_word(&mut game, "wwcsd");
        assert_eq!(game.submit_guess().unwrap(), None);
        assert_eq!(game.status(), GameStatus::PlayerWins);
    }

    #[test]
    fn won_game_rejects_all_operations_with_win_message() {
        let mut game = engine("wwcsd");
        type_word(&mut game, "wwcsd");
        game.submit_guess().unwrap();
        let frozen = *game.board();

        let expected = GameError::GameOver("You Win!".to_string());
        assert_eq!(game.add_letter(Letter::A), Err(expected.clone()));
        assert_eq!(game.remove_last_letter(), Err(expected.clone()));
        assert_eq!(game.submit_guess(), Err(expected));
        assert_eq!(*game.board(), frozen);
    }

    #[test]
    fn lost_game_rejects_all_operations_and_names_the_target() {
        let mut game = engine("wwcsd");
        for _ in 0..6 {
            type_word(&mut game, "hello");
            game.submit_guess().unwrap();
        }
        let frozen = *game.board();

        let expected = GameError::GameOver("WWCSD".to_string());
        assert_eq!(game.add_letter(Letter::A), Err(expected.clone()));
        assert_eq!(game.remove_last_letter(), Err(expected.clone()));
        assert_eq!(game.submit_guess(), Err(expected));
        assert_eq!(*game.board(), frozen);
    }

    #[test]
    fn submit_resets_fill_pointer_to_next_row() {
        let mut game = engine("wwcsd");
        type_word(&mut game, "hello");
        game.submit_guess().unwrap();

        game.add_letter(Letter::W).unwrap();
        assert_eq!(game.board().guess(1).cells()[0].letter(), Some(Letter::W));
        // First row untouched by the new letter
        assert_eq!(game.board().guess(0).cells()[0].letter(), Some(Letter::H));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(GameError::RowFull.to_string(), "Too many letters");
        assert_eq!(GameError::RowEmpty.to_string(), "No letters to delete");
        assert_eq!(
            GameError::IncompleteRow.to_string(),
            "Not enough letters to submit"
        );
        assert_eq!(
            GameError::GameOver("WWCSD".to_string()).to_string(),
            "WWCSD"
        );
    }
}
