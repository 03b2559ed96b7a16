//! Footer widget with the status line and context-sensitive key hints.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strike_core::Phase;

use crate::presentation::theme;
use crate::state::AppMode;
use crate::view_model::UiFrame;

pub fn render(frame: &mut Frame, area: Rect, ui: &UiFrame, mode: &AppMode) {
    let status = match &ui.status {
        Some(line) if line.is_error => {
            Line::from(Span::styled(line.text.clone(), theme::error()))
        }
        Some(line) => Line::from(Span::styled(line.text.clone(), theme::notice())),
        None => Line::from(""),
    };

    let paragraph = Paragraph::new(vec![status, hints_for(ui, mode)])
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn hints_for(ui: &UiFrame, mode: &AppMode) -> Line<'static> {
    match mode {
        AppMode::Striking => {
            let activate = if ui.phase == Phase::Selecting {
                "pick"
            } else {
                "strike"
            };
            hint_line(&[
                ("hjkl/arrows", "move"),
                ("Enter", activate),
                ("u", "undo"),
                ("g", "gentleman"),
                ("+/-", "score"),
                ("s", "setup"),
                ("q", "quit"),
            ])
        }
        AppMode::WinnerDialog | AppMode::ScoreAdjust { .. } => {
            hint_line(&[("1/2", "player"), ("Esc", "back"), ("q", "quit")])
        }
        _ => hint_line(&[("Esc", "back")]),
    }
}

fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(format!("[{key}]"), theme::key_hint()));
        spans.push(Span::styled(format!(" {label}  "), theme::hint_text()));
    }
    Line::from(spans)
}
