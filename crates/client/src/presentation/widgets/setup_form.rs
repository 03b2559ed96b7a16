//! Full-screen match setup form.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strike_core::PlayerIdx;

use crate::presentation::theme;
use crate::state::{SetupField, SetupForm};

/// Renders the setup screen (names, format, first strike, agreement).
pub fn render(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Form fields
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_fields(frame, chunks[1], form);
    render_footer(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("STAGE STRIKE", theme::title())),
        Line::from(Span::styled(
            "stage banning for competitive sets",
            theme::hint_text(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::title()),
    );

    frame.render_widget(title, area);
}

fn render_fields(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let first_banner = if form.first_banner == PlayerIdx::P1 {
        display_name(&form.player1_name, "Player 1")
    } else {
        display_name(&form.player2_name, "Player 2")
    };
    let agreement = if form.gentlemans_agreement { "on" } else { "off" };

    let rows = [
        (SetupField::Player1Name, "Player 1", form.player1_name.clone()),
        (SetupField::Player2Name, "Player 2", form.player2_name.clone()),
        (SetupField::Format, "Format", form.format.label().to_string()),
        (SetupField::FirstBanner, "First strike", first_banner),
        (
            SetupField::Gentlemans,
            "Gentleman's agreement",
            agreement.to_string(),
        ),
    ];

    let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(""))];
    for (field, label, value) in rows {
        let focused = form.focus == field;
        let cursor = if focused && field.is_name() { "_" } else { "" };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(marker(focused), theme::key_hint()),
            Span::styled(format!("{label:<24}"), theme::hint_text()),
            Span::styled(
                format!("{value}{cursor}"),
                if focused {
                    theme::acting()
                } else {
                    Style::default()
                },
            ),
        ])));
    }

    items.push(ListItem::new(Line::from("")));
    let start_focused = form.focus == SetupField::Start;
    items.push(ListItem::new(Line::from(vec![
        Span::styled(marker(start_focused), theme::key_hint()),
        Span::styled(
            "[ Start ]",
            if start_focused {
                theme::selected()
            } else {
                Style::default()
            },
        ),
    ])));

    if let Some(reason) = &form.error {
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(reason.clone(), theme::error()),
        ])));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::title())
            .title(" Match Setup ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab/↑/↓", theme::key_hint()),
            Span::styled(" Field  ", theme::hint_text()),
            Span::styled("←/→", theme::key_hint()),
            Span::styled(" Change  ", theme::hint_text()),
            Span::styled("Enter", theme::key_hint()),
            Span::styled(" Start  ", theme::hint_text()),
            Span::styled("Ctrl+C", theme::key_hint()),
            Span::styled(" Quit", theme::hint_text()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}

fn marker(focused: bool) -> &'static str {
    if focused { "► " } else { "  " }
}

fn display_name(name: &str, fallback: &str) -> String {
    if name.trim().is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}
