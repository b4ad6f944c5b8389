//! Histogram with an optional marginal box strip above the bars.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Widget},
};

use super::{boxplot::draw_box_row, chart_block, fmt_tick};
use crate::{
    charts::HistogramFigure,
    ui::colors,
};

const BAR_GAP: u16 = 1;

pub struct HistogramChart<'a> {
    fig: &'a HistogramFigure,
}

impl<'a> HistogramChart<'a> {
    pub const HEIGHT: u16 = 18;

    pub fn new(fig: &'a HistogramFigure) -> Self {
        Self { fig }
    }

    /// Bar width that spreads the bins over `width` columns.
    fn bar_width(&self, width: u16) -> u16 {
        let n = self.fig.bins.len() as u16;
        if n == 0 {
            return 1;
        }
        (width.saturating_sub(BAR_GAP * (n - 1)) / n).max(1)
    }
}

impl Widget for HistogramChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fig = self.fig;
        let block = chart_block(fig.title, fig.x_title);
        let inner = block.inner(area);
        block.render(area, buf);

        let strip = if fig.marginal.is_some() { 1 } else { 0 };
        let [y_title, strip_area, bars_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(strip),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Line::from(fig.y_title).fg(colors::GRAY).render(y_title, buf);

        let (Some(first), Some(last)) = (fig.bins.first(), fig.bins.last()) else {
            buf.set_string(
                bars_area.x,
                bars_area.y,
                "no numeric values",
                Style::default().fg(colors::GRAY),
            );
            return;
        };

        let color = colors::series_color(fig.palette, 0);
        let bar_width = self.bar_width(bars_area.width);
        let bars: Vec<Bar> = fig
            .bins
            .iter()
            .map(|bin| {
                Bar::default()
                    .value(bin.count)
                    .label(Line::from(fmt_tick(bin.start)))
                    .text_value(bin.count.to_string())
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(colors::contrast_text(color)).bg(color))
            })
            .collect();

        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(BAR_GAP)
            .render(bars_area, buf);

        if let Some(stats) = &fig.marginal {
            // the strip spans exactly the columns the bars occupy
            let n = fig.bins.len() as u16;
            let used = (bar_width * n + BAR_GAP * (n - 1)).min(strip_area.width);
            draw_box_row(
                buf,
                Rect::new(strip_area.x, strip_area.y, used, 1),
                stats,
                first.start,
                last.end,
                color,
            );
        }
    }
}
