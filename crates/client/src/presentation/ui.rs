//! Screen composition for the striking client.
//!
//! Routes rendering on the current app mode:
//! - **Full-screen modes** replace the striking UI (setup form, set summary)
//! - **Overlay modes** draw a modal on top of it (winner, score adjust)
//! - otherwise the standard striking screen is shown
//!
//! Widgets consume the [`UiFrame`] snapshot directly.

use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::presentation::{terminal::Tui, widgets};
use crate::state::AppMode;
use crate::view_model::UiFrame;

pub fn render(terminal: &mut Tui, ui: &UiFrame, mode: &AppMode) -> Result<()> {
    terminal.draw(|frame| draw(frame, ui, mode))?;
    Ok(())
}

pub(crate) fn draw(frame: &mut ratatui::Frame, ui: &UiFrame, mode: &AppMode) {
    if mode.is_fullscreen() {
        draw_fullscreen(frame, ui, mode);
        return;
    }

    draw_striking_screen(frame, ui, mode);

    if mode.is_overlay() {
        draw_overlay(frame, ui, mode);
    }
}

fn draw_fullscreen(frame: &mut ratatui::Frame, ui: &UiFrame, mode: &AppMode) {
    match mode {
        AppMode::Setup(form) => widgets::setup_form::render(frame, frame.area(), form),
        AppMode::SetComplete => widgets::set_complete::render(frame, frame.area(), ui),
        _ => unreachable!("draw_fullscreen called with non-fullscreen mode"),
    }
}

fn draw_overlay(frame: &mut ratatui::Frame, ui: &UiFrame, mode: &AppMode) {
    let area = centered_rect(44, 42, frame.area());
    match mode {
        AppMode::WinnerDialog => widgets::winner_dialog::render(frame, area, ui),
        AppMode::ScoreAdjust { delta } => widgets::score_adjust::render(frame, area, ui, *delta),
        _ => unreachable!("draw_overlay called with non-overlay mode"),
    }
}

/// Scoreboard on top, grid beside the set summary, status and hints below.
fn draw_striking_screen(frame: &mut ratatui::Frame, ui: &UiFrame, mode: &AppMode) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Scoreboard
            Constraint::Min(9),    // Stage grid + set panel
            Constraint::Length(4), // Status + key hints
        ])
        .split(frame.area());

    widgets::scoreboard::render(frame, chunks[0], ui);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(chunks[1]);

    widgets::stage_grid::render(frame, main[0], ui);
    widgets::status_panel::render(frame, main[1], ui);

    widgets::footer::render(frame, chunks[2], ui, mode);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
