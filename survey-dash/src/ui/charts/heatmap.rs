//! Crosstab heatmap: one coloured cell per (row, column) with its count.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};

use super::{chart_block, more_note, MAX_ROWS};
use crate::{
    charts::HeatmapFigure,
    ui::{
        colors,
        layout::{calculate_name_width, row_count, truncate},
    },
};

const MIN_CELL: u16 = 5;
const MAX_CELL: u16 = 16;
/// Swatches in the colour bar.
const SCALE_STEPS: u16 = 10;

pub struct HeatmapChart<'a> {
    fig: &'a HeatmapFigure,
}

impl<'a> HeatmapChart<'a> {
    pub fn new(fig: &'a HeatmapFigure) -> Self {
        Self { fig }
    }

    fn shown_rows(&self) -> usize {
        self.fig.crosstab.rows.len().min(MAX_ROWS)
    }

    fn hidden_rows(&self) -> usize {
        self.fig.crosstab.rows.len() - self.shown_rows()
    }

    pub fn height(&self) -> u16 {
        // border, header, rows, note, colour bar
        let note = usize::from(self.hidden_rows() > 0);
        row_count(self.shown_rows() + note + 4)
    }

    fn cell_width(&self, width: u16) -> u16 {
        let n = row_count(self.fig.crosstab.cols.len().max(1));
        (width / n).clamp(MIN_CELL, MAX_CELL)
    }
}

impl Widget for HeatmapChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fig = self.fig;
        let tab = &fig.crosstab;
        let block = chart_block(fig.title, fig.x_title);
        let inner = block.inner(area);
        block.render(area, buf);

        let label_w = calculate_name_width(
            tab.rows.iter().map(String::as_str).chain([fig.y_title]),
            1,
        );
        let [labels, grid] =
            Layout::horizontal([Constraint::Length(label_w), Constraint::Fill(1)]).areas(inner);
        let cell_w = self.cell_width(grid.width);
        let max = tab.max().max(1) as f64;
        let dim = Style::default().fg(colors::GRAY);
        let max_label = usize::from(label_w.saturating_sub(1));
        let shown_cols = usize::from(grid.width / cell_w).min(tab.cols.len());
        let hidden_cols = tab.cols.len() - shown_cols;
        let shown_rows = self.shown_rows();
        let hidden_rows = self.hidden_rows();
        let col_x = |ci: usize| grid.x + row_count(ci) * cell_w;

        buf.set_stringn(labels.x, labels.y, truncate(fig.y_title, max_label), max_label, dim);
        for (ci, col) in tab.cols.iter().enumerate().take(shown_cols) {
            let x = col_x(ci);
            let text = truncate(col, usize::from(cell_w - 1));
            buf.set_stringn(x, grid.y, text, usize::from(cell_w), Style::default().fg(colors::HEADER));
        }

        let bar_y = inner.bottom().saturating_sub(1);
        let note_y = bar_y.saturating_sub(u16::from(hidden_rows > 0));
        for (ri, row) in tab.rows.iter().enumerate().take(shown_rows) {
            let y = grid.y + 1 + row_count(ri);
            if y >= note_y {
                break;
            }
            buf.set_stringn(
                labels.x,
                y,
                truncate(row, max_label),
                max_label,
                Style::default().fg(colors::HEADER),
            );
            for (ci, count) in tab.counts[ri].iter().enumerate().take(shown_cols) {
                let x = col_x(ci);
                let bg = colors::viridis(*count as f64 / max);
                let style = Style::default().bg(bg).fg(colors::contrast_text(bg));
                let text = format!("{count:^w$}", w = usize::from(cell_w - 1));
                buf.set_stringn(x, y, text, usize::from(cell_w - 1), style);
            }
        }

        if hidden_rows > 0 && note_y > grid.y {
            more_note(hidden_rows, &format!("{} rows", fig.y_title))
                .render(Rect::new(grid.x, note_y, grid.width, 1), buf);
        }

        // colour bar on the last inner row
        let y = bar_y;
        if y <= grid.y {
            return;
        }
        let mut x = grid.x;
        buf.set_string(x, y, "0 ", dim);
        x += 2;
        for i in 0..SCALE_STEPS {
            if x >= grid.right() {
                break;
            }
            let t = f64::from(i) / f64::from(SCALE_STEPS - 1);
            buf[(x, y)].set_symbol("█").set_style(Style::default().fg(colors::viridis(t)));
            x += 1;
        }
        if x < grid.right() {
            let mut label = format!(" {}", tab.max());
            if hidden_cols > 0 {
                label.push_str(&format!("   +{hidden_cols} more columns not shown"));
            }
            buf.set_stringn(
                x,
                y,
                label,
                usize::from(grid.right() - x),
                dim.add_modifier(Modifier::BOLD),
            );
        }
    }
}
