//! Page menu with dataset status underneath.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{palette::tailwind, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    data::Dataset,
    pages::{Section, PAGES},
    ui::{colors, layout::truncate},
};

/// Draws the page menu grouped by section, highlighting `selected`.
pub fn draw_sidebar(f: &mut Frame, area: Rect, selected: usize, dataset: Option<&Dataset>) {
    let block = Block::new()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(colors::GRAY));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [menu_area, status_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(4)]).areas(inner);

    let label_width = usize::from(inner.width.saturating_sub(5));
    let mut lines = Vec::new();
    for section in [Section::Menu, Section::Analysis] {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::styled(
            section.label(),
            Style::default()
                .fg(tailwind::GRAY.c400)
                .add_modifier(Modifier::BOLD),
        ));
        for (i, page) in PAGES.iter().enumerate().filter(|(_, p)| p.section == section) {
            let style = if i == selected {
                Style::default()
                    .fg(colors::HEADER)
                    .bg(colors::GRAY_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(tailwind::GRAY.c300)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(tailwind::YELLOW.c400)),
                Span::styled(format!("{} ", page.icon), style),
                Span::styled(truncate(page.title, label_width), style),
            ]));
        }
    }
    f.render_widget(Paragraph::new(lines), menu_area);

    f.render_widget(Paragraph::new(status_lines(dataset, inner.width)), status_area);
}

fn status_lines(dataset: Option<&Dataset>, width: u16) -> Vec<Line<'static>> {
    let dim = Style::default().fg(tailwind::GRAY.c500);
    let width = usize::from(width);
    match dataset {
        None => vec![Line::styled("loading…", dim)],
        Some(d) if d.error.is_some() => vec![
            Line::styled("load failed", Style::default().fg(colors::ERROR)),
            Line::styled(truncate(&d.url, width), dim),
        ],
        Some(d) => vec![
            Line::styled(
                format!("{} rows × {} cols", d.table.len(), d.table.headers().len()),
                dim,
            ),
            Line::styled(format!("loaded {}", d.loaded_at.format("%H:%M:%S")), dim),
            Line::styled(truncate(&d.url, width), dim),
        ],
    }
}
