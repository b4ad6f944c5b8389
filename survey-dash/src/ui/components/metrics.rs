//! Row of metric cards: label, large value and wrapped help text.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{palette::tailwind, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};

use crate::{
    pages::Metric,
    ui::{
        colors,
        layout::{row_count, wrap_lines},
    },
};

/// Narrowest card before cards wrap onto another row.
const MIN_CARD_WIDTH: u16 = 22;

pub struct MetricCards<'a> {
    metrics: &'a [Metric],
}

impl<'a> MetricCards<'a> {
    pub fn new(metrics: &'a [Metric]) -> Self {
        Self { metrics }
    }

    fn per_row(&self, width: u16) -> usize {
        let fit = usize::from((width / MIN_CARD_WIDTH).max(1));
        fit.min(self.metrics.len().max(1))
    }

    fn card_height(metric: &Metric, card_width: u16) -> u16 {
        // border + label + value + help
        row_count(wrap_lines(&metric.help, card_width.saturating_sub(4)).len()).saturating_add(4)
    }

    fn row_height(row: &[Metric], card_width: u16) -> u16 {
        row.iter()
            .map(|m| Self::card_height(m, card_width))
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self, width: u16) -> u16 {
        let per_row = self.per_row(width);
        let card_width = width / row_count(per_row);
        self.metrics
            .chunks(per_row)
            .map(|row| Self::row_height(row, card_width))
            .fold(0, u16::saturating_add)
    }
}

impl Widget for MetricCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let per_row = self.per_row(area.width);
        let card_width = area.width / row_count(per_row);
        let mut y = area.y;

        for row in self.metrics.chunks(per_row) {
            let h = Self::row_height(row, card_width).min(area.bottom().saturating_sub(y));
            if h == 0 {
                break;
            }
            let row_area = Rect::new(area.x, y, area.width, h);
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, per_row as u32); per_row])
                .split(row_area);

            for (metric, cell) in row.iter().zip(cells.iter()) {
                render_card(metric, *cell, buf);
            }
            y += h;
        }
    }
}

fn render_card(metric: &Metric, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::GRAY))
        .padding(Padding::horizontal(1));

    let mut lines = vec![
        Line::styled(metric.label.clone(), Style::default().fg(tailwind::GRAY.c400)),
        Line::styled(
            metric.value.clone(),
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    lines.extend(
        wrap_lines(&metric.help, area.width.saturating_sub(4))
            .into_iter()
            .map(|l| Line::styled(l, Style::default().fg(tailwind::GRAY.c500))),
    );

    Paragraph::new(lines).block(block).render(area, buf);
}
