//! Terminal widgets for the chart figures.
//!
//! - [`HistogramChart`]: binned counts with a marginal box strip
//! - [`PieChart`]: braille donut with a share legend
//! - [`HeatmapChart`]: crosstab grid on the viridis scale
//! - [`BarsChart`]: grouped bars with a colour legend
//! - [`BoxChart`]: horizontal box-and-whisker rows on a shared axis
//!
//! All widgets implement the ratatui `Widget` trait for rendering.

mod bars;
mod boxplot;
mod heatmap;
mod histogram;
mod pie;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Widget},
};

pub use bars::BarsChart;
pub use boxplot::BoxChart;
pub use heatmap::HeatmapChart;
pub use histogram::HistogramChart;
pub use pie::PieChart;

use crate::{
    charts::{Figure, Palette},
    ui::colors,
};

/// Most data rows a single chart draws; the rest are summarised in one line.
pub(crate) const MAX_ROWS: usize = 40;

/// Dispatches a figure to its widget.
pub struct FigureView<'a> {
    figure: &'a Figure,
}

impl<'a> FigureView<'a> {
    pub fn new(figure: &'a Figure) -> Self {
        Self { figure }
    }

    /// Rows the figure needs at `width`.
    pub fn height(&self, _width: u16) -> u16 {
        match self.figure {
            Figure::Histogram(_) => HistogramChart::HEIGHT,
            Figure::Pie(_) => PieChart::HEIGHT,
            Figure::Heatmap(f) => HeatmapChart::new(f).height(),
            Figure::Bar(_) => BarsChart::HEIGHT,
            Figure::Box(f) => BoxChart::new(f).height(),
        }
    }
}

impl Widget for FigureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.figure {
            Figure::Histogram(f) => HistogramChart::new(f).render(area, buf),
            Figure::Pie(f) => PieChart::new(f).render(area, buf),
            Figure::Heatmap(f) => HeatmapChart::new(f).render(area, buf),
            Figure::Bar(f) => BarsChart::new(f).render(area, buf),
            Figure::Box(f) => BoxChart::new(f).render(area, buf),
        }
    }
}

/// Frame shared by all charts: title on top, x axis title at the bottom.
fn chart_block<'a>(title: &'a str, x_title: &'a str) -> Block<'a> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::GRAY))
        .title(Line::from(format!(" {title} ")).bold())
        .title_bottom(Line::from(format!(" {x_title} ")).fg(colors::GRAY).centered())
}

/// `name: ■ a  ■ b …` legend line.
fn legend_line<'a>(name: &'a str, entries: &'a [String], palette: Palette) -> Line<'a> {
    let mut spans = vec![Span::raw(format!("{name}: ")).fg(colors::GRAY)];
    for (i, entry) in entries.iter().enumerate() {
        spans.push(Span::raw("■ ").fg(colors::series_color(palette, i)));
        spans.push(Span::raw(format!("{entry}  ")));
    }
    Line::from(spans)
}

/// `+K more <what> not shown` note under a capped chart.
fn more_note(hidden: usize, what: &str) -> Line<'static> {
    Line::from(format!("+{hidden} more {what} not shown")).fg(colors::GRAY)
}

/// Compact axis label: integers without decimals.
fn fmt_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Maps `v` in `[lo, hi]` onto a column offset in `0..width`.
fn scale(v: f64, lo: f64, hi: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let span = hi - lo;
    let t = if span > 0.0 { (v - lo) / span } else { 0.5 };
    (t.clamp(0.0, 1.0) * f64::from(width - 1)).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        assert_eq!(scale(15.0, 15.0, 25.0, 11), 0);
        assert_eq!(scale(20.0, 15.0, 25.0, 11), 5);
        assert_eq!(scale(25.0, 15.0, 25.0, 11), 10);
        assert_eq!(scale(99.0, 15.0, 25.0, 11), 10);
        // degenerate range centres the mark
        assert_eq!(scale(3.0, 3.0, 3.0, 11), 5);
    }

    #[test]
    fn test_fmt_tick() {
        assert_eq!(fmt_tick(20.0), "20");
        assert_eq!(fmt_tick(22.5), "22.5");
    }
}
