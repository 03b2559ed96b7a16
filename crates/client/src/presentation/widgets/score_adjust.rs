//! Modal dialog picking whose score a manual +1/-1 applies to.

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

pub fn render(frame: &mut Frame, area: Rect, ui: &UiFrame, delta: i32) {
    let verb = if delta >= 0 { "Add a win" } else { "Remove a win" };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::raw(format!("{verb} for which player?"))),
        Line::from(""),
    ];

    for (index, seat) in [PlayerIdx::P1, PlayerIdx::P2].into_iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", index + 1), theme::key_hint()),
            Span::styled(
                ui.players[index].name.clone(),
                Style::default()
                    .fg(theme::seat_color(seat))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", ui.players[index].score),
                theme::hint_text(),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("scores stay between 0 and {}", ui.win_threshold - 1),
        theme::dim(),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::title())
            .title(" Adjust Score ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(paragraph, area);
}
