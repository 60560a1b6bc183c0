//! Interactive TUI interface
//!
//! The presentation layer. It owns no game rules: key presses are
//! translated into engine operations, engine errors become on-screen
//! messages, and the board is rendered from the engine's read-only view.

mod app;
mod rendering;

pub use app::{App, Statistics, run_tui};
