//! Horizontal box-and-whisker rows on a shared value axis.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::{chart_block, fmt_tick, legend_line, more_note, scale, MAX_ROWS};
use crate::{
    charts::BoxFigure,
    data::stats::BoxStats,
    ui::{
        colors,
        layout::{calculate_name_width, row_count, truncate},
    },
};

/// How much of a figure fits under the row cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fit {
    categories: usize,
    groups: usize,
    /// Box rows left out.
    hidden: usize,
}

pub struct BoxChart<'a> {
    fig: &'a BoxFigure,
}

impl<'a> BoxChart<'a> {
    pub fn new(fig: &'a BoxFigure) -> Self {
        Self { fig }
    }

    fn fit(&self) -> Fit {
        let total_groups = self.fig.groups.len();
        let total_categories = self.fig.categories.len();
        let groups = total_groups.min(MAX_ROWS);
        let categories = match groups {
            0 => 0,
            g => (MAX_ROWS / g).max(1).min(total_categories),
        };
        let total = total_categories.saturating_mul(total_groups);
        Fit {
            categories,
            groups,
            hidden: total - categories * groups,
        }
    }

    pub fn height(&self) -> u16 {
        let fit = self.fit();
        // border, legend, one row per shown (category, group), note, axis, ticks
        let note = usize::from(fit.hidden > 0);
        row_count(fit.categories * fit.groups + note + 5)
    }
}

impl Widget for BoxChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fig = self.fig;
        let block = chart_block(fig.title, fig.y_title);
        let inner = block.inner(area);
        block.render(area, buf);

        let fit = self.fit();
        let [legend_area, rows_area, note_area, axis_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(u16::from(fit.hidden > 0)),
            Constraint::Length(2),
        ])
        .areas(inner);

        legend_line(fig.legend, &fig.groups, fig.palette).render(legend_area, buf);
        if fit.hidden > 0 {
            more_note(fit.hidden, "boxes").render(note_area, buf);
        }

        let Some((lo, hi)) = fig.value_range() else {
            buf.set_string(
                rows_area.x,
                rows_area.y,
                "no numeric values",
                Style::default().fg(colors::GRAY),
            );
            return;
        };

        let label_w = calculate_name_width(
            fig.categories
                .iter()
                .map(String::as_str)
                .chain([fig.x_title]),
            1,
        );
        let [labels, plot] =
            Layout::horizontal([Constraint::Length(label_w), Constraint::Fill(1)]).areas(rows_area);

        let mut y = rows_area.y;
        for (ci, category) in fig.categories.iter().enumerate().take(fit.categories) {
            for (gi, stats) in fig.stats[ci].iter().enumerate().take(fit.groups) {
                if y >= rows_area.bottom() {
                    break;
                }
                if gi == 0 {
                    buf.set_stringn(
                        labels.x,
                        y,
                        truncate(category, usize::from(label_w.saturating_sub(1))),
                        usize::from(label_w),
                        Style::default().fg(colors::HEADER),
                    );
                }
                if let Some(stats) = stats {
                    let color = colors::series_color(fig.palette, gi);
                    draw_box_row(buf, Rect::new(plot.x, y, plot.width, 1), stats, lo, hi, color);
                }
                y += 1;
            }
        }

        let [axis_labels, axis_plot] =
            Layout::horizontal([Constraint::Length(label_w), Constraint::Fill(1)]).areas(axis_area);
        buf.set_stringn(
            axis_labels.x,
            axis_labels.y,
            truncate(fig.x_title, usize::from(label_w.saturating_sub(1))),
            usize::from(label_w),
            Style::default().fg(colors::GRAY),
        );
        draw_axis(buf, axis_plot, lo, hi);
    }
}

/// Draws one box: whiskers, the inter-quartile box, the median and outliers.
pub(super) fn draw_box_row(
    buf: &mut Buffer,
    row: Rect,
    stats: &BoxStats,
    lo: f64,
    hi: f64,
    color: Color,
) {
    if row.width == 0 {
        return;
    }
    let x = |v: f64| row.x + scale(v, lo, hi, row.width);
    let style = Style::default().fg(color);

    for cx in x(stats.lower_whisker)..=x(stats.upper_whisker) {
        buf[(cx, row.y)].set_symbol("─").set_style(style);
    }
    buf[(x(stats.lower_whisker), row.y)].set_symbol("├");
    buf[(x(stats.upper_whisker), row.y)].set_symbol("┤");
    for cx in x(stats.q1)..=x(stats.q3) {
        buf[(cx, row.y)].set_symbol("█").set_style(style);
    }
    buf[(x(stats.median), row.y)]
        .set_symbol("┃")
        .set_style(Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD));
    for v in &stats.outliers {
        buf[(x(*v), row.y)].set_symbol("•").set_style(style);
    }
}

/// Axis line with min, middle and max ticks underneath.
fn draw_axis(buf: &mut Buffer, area: Rect, lo: f64, hi: f64) {
    if area.width == 0 || area.height < 2 {
        return;
    }
    let style = Style::default().fg(colors::GRAY);
    for cx in area.x..area.right() {
        buf[(cx, area.y)].set_symbol("─").set_style(style);
    }

    let mid = (lo + hi) / 2.0;
    let ticks = [(lo, fmt_tick(lo)), (mid, fmt_tick(mid)), (hi, fmt_tick(hi))];
    for (v, label) in ticks {
        let at = area.x + scale(v, lo, hi, area.width);
        buf[(at, area.y)].set_symbol("┬");
        let w = row_count(label.len());
        let start = at
            .saturating_sub(w / 2)
            .clamp(area.x, area.right().saturating_sub(w).max(area.x));
        buf.set_stringn(start, area.y + 1, &label, usize::from(area.right() - start), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::Palette;

    fn figure() -> BoxFigure {
        let stats = |v: &[f64]| BoxStats::from_values(v);
        BoxFigure {
            title: "Age of First Use",
            x_title: "Religion",
            y_title: "Age of First Use (Midpoint)",
            legend: "Type of Addiction",
            palette: Palette::Dark24,
            categories: vec!["Christian".into(), "Islam".into()],
            groups: vec!["Alcohol".into(), "Cannabis".into()],
            stats: vec![
                vec![None, stats(&[21.0])],
                vec![stats(&[15.0, 17.0]), stats(&[19.0])],
            ],
        }
    }

    #[test]
    fn test_box_chart_height() {
        assert_eq!(BoxChart::new(&figure()).height(), 9);
    }

    #[test]
    fn test_many_categories_are_capped() {
        // 300 x 220 boxes would overflow a u16 height
        let categories: Vec<String> = (0..300).map(|i| format!("religion {i}")).collect();
        let groups: Vec<String> = (0..220).map(|i| format!("substance {i}")).collect();
        let row: Vec<Option<BoxStats>> = (0..220).map(|_| BoxStats::from_values(&[18.0])).collect();
        let fig = BoxFigure {
            stats: vec![row; 300],
            categories,
            groups,
            ..figure()
        };
        let chart = BoxChart::new(&fig);
        let fit = chart.fit();
        assert_eq!((fit.categories, fit.groups), (1, MAX_ROWS));
        assert_eq!(fit.hidden, 300 * 220 - MAX_ROWS);
        assert_eq!(chart.height(), MAX_ROWS as u16 + 6);

        let area = Rect::new(0, 0, 60, chart.height());
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf);
        let note: String = (0..60)
            .map(|x| buf[(x, area.height - 4)].symbol().to_string())
            .collect();
        assert!(note.contains("+65960 more boxes not shown"));
    }

    #[test]
    fn test_box_row_marks() {
        let stats = BoxStats::from_values(&[10.0, 12.0, 14.0, 16.0, 18.0]).unwrap();
        let row = Rect::new(0, 0, 11, 1);
        let mut buf = Buffer::empty(row);
        draw_box_row(&mut buf, row, &stats, 10.0, 20.0, Color::Red);
        assert_eq!(buf[(0, 0)].symbol(), "├");
        assert_eq!(buf[(4, 0)].symbol(), "┃");
        assert_eq!(buf[(8, 0)].symbol(), "┤");
        assert_eq!(buf[(10, 0)].symbol(), " ");
    }

    #[test]
    fn test_box_chart_renders_labels_and_ticks() {
        let fig = figure();
        let chart = BoxChart::new(&fig);
        let area = Rect::new(0, 0, 60, chart.height());
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf);

        let line = |y: u16| -> String { (0..60).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(line(1).contains("Type of Addiction"));
        assert!(line(2).starts_with("│Christian"));
        assert!(line(4).starts_with("│Islam"));
        assert!(line(7).contains("15"));
        assert!(line(7).contains("21"));
    }
}
