//! Side panel listing the strikes of the current game and decided games.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;
use crate::view_model::UiFrame;

pub fn render(frame: &mut Frame, area: Rect, ui: &UiFrame) {
    let mut lines = vec![Line::from(Span::styled("Strikes", theme::title()))];

    if ui.strike_log.is_empty() {
        lines.push(Line::from(Span::styled("none yet", theme::dim())));
    }
    for entry in &ui.strike_log {
        lines.push(Line::from(Span::styled(entry.clone(), theme::hint_text())));
    }

    if !ui.history.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Games", theme::title())));
        for row in &ui.history {
            lines.push(Line::from(vec![
                Span::styled(format!("game {}: ", row.game_number), theme::dim()),
                Span::styled(row.winner.clone(), theme::notice()),
                Span::styled(format!(" on {}", row.stage), theme::hint_text()),
            ]));
        }
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Set "));

    frame.render_widget(paragraph, area);
}
