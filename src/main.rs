//! Wordle Game - CLI
//!
//! Starts one interactive session in the terminal. The target word is drawn
//! from the embedded answer list unless `--word` fixes it.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use wordle_game::core::Word;
use wordle_game::interactive::{App, Statistics, run_tui};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in your terminal",
    version,
    author
)]
struct Cli {
    /// Fix the target word (5 letters) instead of drawing a random one
    #[arg(short = 'w', long)]
    word: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fixed_word = match cli.word.as_deref() {
        Some(text) => Some(Word::new(text)?),
        None => None,
    };

    let app = App::new(fixed_word);
    let stats = run_tui(app)?;

    print_session_summary(&stats);
    Ok(())
}

fn print_session_summary(stats: &Statistics) {
    if stats.total_games == 0 {
        return;
    }

    let win_rate = stats.games_won as f64 / stats.total_games as f64 * 100.0;

    println!("\n{}", "Session summary".bold());
    println!("  Games played: {}", stats.total_games);
    println!(
        "  Games won:    {} ({win_rate:.0}%)",
        stats.games_won.to_string().green()
    );

    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        if count > 0 {
            println!("  Won in {guesses}: {}", "█".repeat(count).green());
        }
    }
}
