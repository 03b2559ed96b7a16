//! Shared styles for the terminal UI.
//!
//! Widgets pull their colors from here so the two player seats stay
//! visually consistent across the scoreboard, dialogs, and footer.

use ratatui::style::{Color, Modifier, Style};
use strike_core::PlayerIdx;

/// Seat colors match the scoreboard convention: player one red, player two blue.
pub fn seat_color(seat: PlayerIdx) -> Color {
    if seat == PlayerIdx::P1 {
        Color::Red
    } else {
        Color::Blue
    }
}

pub fn title() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Highlight for whoever owes the next input.
pub fn acting() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Struck stages stay readable but clearly out of play.
pub fn struck() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn selected() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn cursor() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

pub fn error() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

pub fn notice() -> Style {
    Style::default().fg(Color::Green)
}

pub fn key_hint() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn hint_text() -> Style {
    Style::default().fg(Color::Gray)
}
