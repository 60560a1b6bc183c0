//! TUI application state and logic

use crate::core::{CellStatus, GameEngine, GameStatus, Letter, Word};
use crate::wordlists;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: GameEngine,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    fixed_word: Option<Word>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl App {
    /// Create the app, fixing the target word if one was given on the
    /// command line and drawing a random answer otherwise
    #[must_use]
    pub fn new(fixed_word: Option<Word>) -> Self {
        let target = fixed_word.unwrap_or_else(wordlists::random_answer);

        let mut app = Self {
            game: GameEngine::new(target),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            fixed_word,
        };
        app.add_message("Welcome! Type a 5-letter guess and press Enter.", MessageStyle::Info);
        app
    }

    pub fn new_game(&mut self) {
        let target = self.fixed_word.unwrap_or_else(wordlists::random_answer);
        self.game = GameEngine::new(target);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Feed a typed character into the engine; non-letters are ignored
    pub fn type_letter(&mut self, c: char) {
        let Some(letter) = Letter::from_char(c) else {
            return;
        };
        if let Err(e) = self.game.add_letter(letter) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn erase_letter(&mut self) {
        if let Err(e) = self.game.remove_last_letter() {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn submit(&mut self) {
        match self.game.submit_guess() {
            Ok(Some(revealed)) => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!("Game over! The word was {revealed}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(None) => {
                if self.game.status() == GameStatus::PlayerWins {
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    let guess_count = self.guesses_used();
                    if guess_count <= 6 {
                        self.stats.guess_distribution[guess_count] += 1;
                    }

                    let celebration = match guess_count {
                        1 => "HOLE IN ONE! Extraordinary!",
                        2 => "MAGNIFICENT! Two guesses!",
                        3 => "SPLENDID! Three guesses!",
                        4 => "GREAT JOB! Four guesses!",
                        5 => "NICE WORK! Five guesses!",
                        _ => "PHEW! Got it in six!",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message(
                        "Press 'n' for a new game or 'q' to quit.",
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Number of rows scored so far, derived from the board
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.game
            .board()
            .guesses()
            .iter()
            .filter(|guess| {
                guess.cells()[0]
                    .status()
                    .is_some_and(|s| s != CellStatus::Unsubmitted)
            })
            .count()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the session statistics once the player quits.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(app.stats)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                code => match app.game.status() {
                    GameStatus::InProgress => match code {
                        KeyCode::Char(c) => app.type_letter(c),
                        KeyCode::Backspace => app.erase_letter(),
                        KeyCode::Enter => app.submit(),
                        _ => {}
                    },
                    GameStatus::PlayerWins | GameStatus::PlayerLoses => match code {
                        KeyCode::Char('n') => app.new_game(),
                        KeyCode::Char('q') => app.should_quit = true,
                        _ => {
                            // Game over: ignore other keys
                        }
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_target(target: &str) -> App {
        App::new(Some(Word::new(target).unwrap()))
    }

    fn play_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.type_letter(c);
        }
        app.submit();
    }

    #[test]
    fn non_letter_keys_are_ignored() {
        let mut app = app_with_target("wwcsd");
        app.type_letter('3');
        app.type_letter('!');
        assert!(app.game.board().guess(0).cells()[0].is_empty());
    }

    #[test]
    fn engine_errors_become_messages() {
        let mut app = app_with_target("wwcsd");
        app.erase_letter();
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "No letters to delete");
        assert!(matches!(last.style, MessageStyle::Error));
    }

    #[test]
    fn winning_updates_statistics() {
        let mut app = app_with_target("wwcsd");
        play_word(&mut app, "hello");
        play_word(&mut app, "wwcsd");

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
    }

    #[test]
    fn losing_reveals_the_word_in_a_message() {
        let mut app = app_with_target("wwcsd");
        for _ in 0..6 {
            play_word(&mut app, "hello");
        }

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Game over! The word was WWCSD.")
        );
    }

    #[test]
    fn new_game_keeps_the_fixed_word() {
        let mut app = app_with_target("wwcsd");
        play_word(&mut app, "wwcsd");
        app.new_game();
        play_word(&mut app, "wwcsd");

        assert_eq!(app.stats.games_won, 2);
    }
}
