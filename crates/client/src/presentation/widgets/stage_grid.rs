//! The 3x3 stage grid, the centerpiece of the striking screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;
use crate::view_model::{StageCell, UiFrame};

/// Render the nine stage cells with the phase prompt as the block title.
pub fn render(frame: &mut Frame, area: Rect, ui: &UiFrame) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::title())
        .title(format!(" {} ", ui.prompt))
        .title_alignment(Alignment::Center);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            render_cell(frame, *cell_area, &ui.stages[row * 3 + col]);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &StageCell) {
    let name_style = if cell.is_selected {
        theme::selected()
    } else if cell.banned_by.is_some() {
        theme::struck()
    } else {
        Style::default()
    };

    let detail = if cell.is_selected {
        Line::from(Span::styled("picked", theme::selected()))
    } else if let Some(striker) = &cell.banned_by {
        Line::from(Span::styled(format!("x {striker}"), theme::dim()))
    } else {
        Line::from("")
    };

    let marker = if cell.under_cursor { "► " } else { "" };
    let border_style = if cell.under_cursor {
        theme::acting()
    } else if cell.is_selected {
        theme::selected()
    } else {
        theme::dim()
    };

    let text = vec![
        Line::from(vec![
            Span::styled(marker, theme::key_hint()),
            Span::styled(cell.name, name_style),
        ]),
        detail,
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(paragraph, area);
}
