//! Scoreboard widget showing both players and the set standing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strike_core::PlayerIdx;

use crate::presentation::theme;
use crate::view_model::UiFrame;

/// Render the two player cards around the format/game counter.
pub fn render(frame: &mut Frame, area: Rect, ui: &UiFrame) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(38),
            Constraint::Percentage(24),
            Constraint::Percentage(38),
        ])
        .split(area);

    render_player(frame, chunks[0], ui, 0);
    render_standing(frame, chunks[1], ui);
    render_player(frame, chunks[2], ui, 1);
}

fn render_player(frame: &mut Frame, area: Rect, ui: &UiFrame, index: usize) {
    let card = &ui.players[index];
    let seat = [PlayerIdx::P1, PlayerIdx::P2][index];

    let role = if card.is_acting {
        "striking"
    } else if card.is_selector {
        "picking"
    } else {
        ""
    };

    let text = vec![
        Line::from(Span::styled(
            card.name.clone(),
            Style::default()
                .fg(theme::seat_color(seat))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                card.score.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" / {}", ui.win_threshold)),
        ]),
        Line::from(Span::styled(role, theme::acting())),
    ];

    let border_style = if card.is_acting || card.is_selector {
        theme::acting()
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Player {} ", index + 1)),
    );

    frame.render_widget(paragraph, area);
}

fn render_standing(frame: &mut Frame, area: Rect, ui: &UiFrame) {
    let ga = if ui.gentlemans { "gentleman's" } else { "" };

    let text = vec![
        Line::from(Span::styled(ui.format_label, theme::title())),
        Line::from(Span::raw(format!("game {}", ui.game_number))),
        Line::from(Span::styled(ga, theme::notice())),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
