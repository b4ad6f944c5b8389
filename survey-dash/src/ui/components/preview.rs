//! Head-of-table data preview.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{palette::tailwind, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Row, Table, Widget},
};

use crate::{
    pages::Preview,
    ui::{
        colors,
        layout::{row_count, truncate},
    },
};

const MIN_COL: usize = 4;
const MAX_COL: usize = 18;
const COL_SPACING: u16 = 1;

pub struct PreviewTable<'a> {
    preview: &'a Preview,
}

impl<'a> PreviewTable<'a> {
    pub fn new(preview: &'a Preview) -> Self {
        Self { preview }
    }

    pub fn height(&self) -> u16 {
        // border + header + rows
        row_count(self.preview.rows.len()).saturating_add(3)
    }

    /// Width of each column, clamped.
    fn column_widths(&self) -> Vec<u16> {
        (0..self.preview.headers.len())
            .map(|i| {
                let cells = self
                    .preview
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count());
                let header = self.preview.headers[i].chars().count();
                cells.chain([header]).max().unwrap_or(0).clamp(MIN_COL, MAX_COL) as u16
            })
            .collect()
    }

    /// Number of leading columns that fit in `width`.
    fn visible_columns(widths: &[u16], width: u16) -> usize {
        let mut used = 0u16;
        widths
            .iter()
            .take_while(|w| {
                used = used.saturating_add(**w + COL_SPACING);
                used <= width
            })
            .count()
            .max(1)
            .min(widths.len())
    }
}

impl Widget for PreviewTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let widths = self.column_widths();
        let shown = Self::visible_columns(&widths, area.width.saturating_sub(2));
        let total = self.preview.headers.len();

        let header = Row::new(
            self.preview.headers[..shown]
                .iter()
                .zip(&widths)
                .map(|(h, w)| truncate(h, usize::from(*w))),
        )
        .style(
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.preview.rows.iter().map(|r| {
            Row::new(
                r.iter()
                    .take(shown)
                    .zip(&widths)
                    .map(|(c, w)| truncate(c, usize::from(*w))),
            )
        });

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::GRAY));
        if shown < total {
            block = block.title_bottom(
                Line::styled(
                    format!(" {shown} of {total} columns "),
                    Style::default().fg(tailwind::GRAY.c500),
                )
                .right_aligned(),
            );
        }

        Table::new(rows, widths[..shown].iter().map(|w| Constraint::Length(*w)))
            .header(header)
            .column_spacing(COL_SPACING)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview() -> Preview {
        Preview {
            headers: vec!["age_midpoint".into(), "marital_status".into(), "religion".into()],
            rows: vec![
                vec!["22.5".into(), "Not Married".into(), "Islam".into()],
                vec!["27.5".into(), "Married".into(), "Christian".into()],
            ],
        }
    }

    #[test]
    fn test_visible_columns_limited_by_width() {
        let p = preview();
        let table = PreviewTable::new(&p);
        let widths = table.column_widths();
        assert_eq!(widths, vec![12, 14, 9]);
        assert_eq!(PreviewTable::visible_columns(&widths, 80), 3);
        assert_eq!(PreviewTable::visible_columns(&widths, 28), 2);
        assert_eq!(PreviewTable::visible_columns(&widths, 3), 1);
        assert_eq!(table.height(), 5);
    }

    #[test]
    fn test_preview_renders_header_and_rows() {
        let p = preview();
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        PreviewTable::new(&p).render(area, &mut buf);
        let line = |y: u16| -> String { (0..60).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(line(1).contains("age_midpoint"));
        assert!(line(2).contains("Not Married"));
        assert!(line(3).contains("Christian"));
    }
}
