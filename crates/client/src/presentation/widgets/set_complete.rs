//! Full-screen summary shown once a player reaches the win threshold.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::presentation::theme;
use crate::view_model::UiFrame;

pub fn render(frame: &mut Frame, area: Rect, ui: &UiFrame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Winner banner
            Constraint::Min(0),    // Game summary
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_banner(frame, chunks[0], ui);
    render_games(frame, chunks[1], ui);
    render_footer(frame, chunks[2]);
}

fn render_banner(frame: &mut Frame, area: Rect, ui: &UiFrame) {
    let headline = match &ui.set_winner {
        Some(winner) => format!("{winner} wins the set"),
        None => "set complete".to_string(),
    };
    let score_line = format!(
        "{} {} - {} {}",
        ui.players[0].name, ui.players[0].score, ui.players[1].score, ui.players[1].name
    );

    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(headline, theme::selected())),
        Line::from(""),
        Line::from(Span::styled(score_line, theme::title())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::selected()),
    );

    frame.render_widget(banner, area);
}

fn render_games(frame: &mut Frame, area: Rect, ui: &UiFrame) {
    let mut items = vec![ListItem::new(Line::from(""))];
    for row in &ui.history {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("  game {}  ", row.game_number), theme::dim()),
            Span::styled(row.winner.clone(), theme::notice()),
            Span::styled(format!(" on {}", row.stage), theme::hint_text()),
        ])));
    }
    items.push(ListItem::new(Line::from("")));
    items.push(ListItem::new(Line::from(Span::styled(
        format!("  {} stages struck across the set", ui.total_bans),
        theme::dim(),
    ))));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", ui.format_label))
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("n", theme::key_hint()),
            Span::styled(" New match  ", theme::hint_text()),
            Span::styled("r", theme::key_hint()),
            Span::styled(" Rematch  ", theme::hint_text()),
            Span::styled("s", theme::key_hint()),
            Span::styled(" Setup  ", theme::hint_text()),
            Span::styled("q", theme::key_hint()),
            Span::styled(" Quit", theme::hint_text()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}
