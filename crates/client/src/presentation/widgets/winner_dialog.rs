//! Modal dialog asking who won the game just played.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strike_core::PlayerIdx;

use crate::presentation::theme;
use crate::view_model::UiFrame;

pub fn render(frame: &mut Frame, area: Rect, ui: &UiFrame) {
    let mut lines = vec![Line::from("")];

    if let Some(stage) = &ui.selected_stage {
        lines.push(Line::from(vec![
            Span::styled("playing ", theme::hint_text()),
            Span::styled(stage.clone(), theme::selected()),
        ]));
        lines.push(Line::from(""));
    }

    for (index, seat) in [PlayerIdx::P1, PlayerIdx::P2].into_iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", index + 1), theme::key_hint()),
            Span::styled(
                ui.players[index].name.clone(),
                Style::default()
                    .fg(theme::seat_color(seat))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Esc to go back", theme::dim())));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::title())
            .title(format!(" Who wins game {}? ", ui.game_number))
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(paragraph, area);
}
