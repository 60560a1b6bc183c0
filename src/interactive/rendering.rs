//! TUI rendering with ratatui
//!
//! Draws the board grid, the message list and the status bar from the
//! engine's read-only state.

use super::app::{App, MessageStyle};
use crate::core::{Cell, CellStatus, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::default()];

    for guess in app.game.board().guesses() {
        let mut spans = Vec::new();
        for cell in guess.cells() {
            spans.push(cell_span(cell));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn cell_span(cell: &Cell) -> Span<'static> {
    let text = match cell.letter() {
        Some(letter) => format!(" {letter} "),
        None => " · ".to_string(),
    };

    let style = match cell.status() {
        None => Style::default().fg(Color::DarkGray),
        Some(CellStatus::Unsubmitted) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Some(CellStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(CellStatus::PartiallyCorrect) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(CellStatus::Incorrect) => Style::default().fg(Color::White).bg(Color::DarkGray),
    };

    Span::styled(text, style)
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let (status_text, status_color) = match app.game.status() {
        GameStatus::InProgress => (
            format!("Guess {} of 6", (app.guesses_used() + 1).min(6)),
            Color::White,
        ),
        GameStatus::PlayerWins => ("You Win!".to_string(), Color::Green),
        GameStatus::PlayerLoses => ("You Lose".to_string(), Color::Red),
    };
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(status_color));
    f.render_widget(status, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.game.status() {
        GameStatus::InProgress => "Type letters | Backspace: Erase | Enter: Submit | Esc: Quit",
        GameStatus::PlayerWins | GameStatus::PlayerLoses => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
