//! Grouped bar chart: one group per x category, one bar per colour group.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Widget},
};

use super::{chart_block, legend_line, more_note};
use crate::{
    charts::BarFigure,
    ui::{colors, layout::row_count},
};

const GROUP_GAP: u16 = 2;
const MAX_BAR_WIDTH: u16 = 9;

pub struct BarsChart<'a> {
    fig: &'a BarFigure,
}

impl<'a> BarsChart<'a> {
    pub const HEIGHT: u16 = 18;

    pub fn new(fig: &'a BarFigure) -> Self {
        Self { fig }
    }

    /// Bars carry integers; means keep their decimals by scaling.
    fn scale(&self) -> f64 {
        10f64.powi(self.fig.decimals as i32)
    }

    fn bar_width(&self, width: u16) -> u16 {
        let s = &self.fig.series;
        let groups = s.categories.len().max(1);
        let bars = groups.saturating_mul(s.groups.len().max(1));
        let free = usize::from(width).saturating_sub(usize::from(GROUP_GAP).saturating_mul(groups));
        row_count(free / bars).clamp(1, MAX_BAR_WIDTH)
    }

    /// Categories whose bar groups fit in `width`.
    fn fitting_groups(&self, width: u16) -> usize {
        let s = &self.fig.series;
        let per_group = usize::from(self.bar_width(width))
            .saturating_mul(s.groups.len().max(1))
            .saturating_add(usize::from(GROUP_GAP));
        (usize::from(width) / per_group).clamp(1, s.categories.len().max(1))
    }

    fn groups(&self, limit: usize) -> Vec<BarGroup<'a>> {
        let fig = self.fig;
        let scale = self.scale();
        fig.series
            .categories
            .iter()
            .zip(&fig.series.values)
            .take(limit)
            .map(|(category, values)| {
                let bars: Vec<Bar> = values
                    .iter()
                    .enumerate()
                    .map(|(gi, v)| {
                        let color = colors::series_color(fig.palette, gi);
                        let text = v
                            .map(|v| format!("{v:.prec$}", prec = fig.decimals))
                            .unwrap_or_default();
                        Bar::default()
                            .value((v.unwrap_or(0.0) * scale).round() as u64)
                            .text_value(text)
                            .style(Style::default().fg(color))
                            .value_style(Style::default().fg(colors::contrast_text(color)).bg(color))
                    })
                    .collect();
                BarGroup::default()
                    .label(Line::from(category.as_str()).centered())
                    .bars(&bars)
            })
            .collect()
    }
}

impl Widget for BarsChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fig = self.fig;
        let block = chart_block(fig.title, fig.x_title);
        let inner = block.inner(area);
        block.render(area, buf);

        let [legend_area, y_title, chart_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        legend_line(fig.legend, &fig.series.groups, fig.palette).render(legend_area, buf);
        Line::from(fig.y_title).fg(colors::GRAY).render(y_title, buf);

        if fig.series.categories.is_empty() {
            buf.set_string(
                chart_area.x,
                chart_area.y,
                "no values",
                Style::default().fg(colors::GRAY),
            );
            return;
        }

        let mut chart = BarChart::default()
            .bar_width(self.bar_width(chart_area.width))
            .bar_gap(0)
            .group_gap(GROUP_GAP)
            .max((fig.series.max() * self.scale()).ceil().max(1.0) as u64);
        let shown = self.fitting_groups(chart_area.width);
        for group in self.groups(shown) {
            chart = chart.data(group);
        }
        chart.render(chart_area, buf);

        let hidden = fig.series.categories.len().saturating_sub(shown);
        if hidden > 0 {
            more_note(hidden, "categories")
                .right_aligned()
                .render(y_title, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{charts::Palette, data::stats::GroupedSeries};

    fn figure() -> BarFigure {
        let rows = [
            (Some("Poor"), Some(22.5), Some("1")),
            (Some("Poor"), Some(17.5), Some("1")),
            (Some("Good"), Some(27.5), Some("0")),
            (Some("Good"), Some(30.0), Some("1")),
        ];
        BarFigure {
            title: "Average Age Midpoint",
            x_title: "Mental Health Status",
            y_title: "Average Age Midpoint",
            legend: "Failure in Life (1=Yes, 0=No)",
            palette: Palette::Vivid,
            series: GroupedSeries::means(rows),
            decimals: 1,
        }
    }

    #[test]
    fn test_means_keep_decimals() {
        let fig = figure();
        let chart = BarsChart::new(&fig);
        let groups = chart.groups(usize::MAX);
        assert_eq!(groups.len(), 2);
        assert_eq!(chart.scale(), 10.0);
    }

    #[test]
    fn test_bar_width_clamped() {
        let fig = figure();
        let chart = BarsChart::new(&fig);
        // 2 categories x 2 groups, 4 columns of group gap
        assert_eq!(chart.bar_width(40), 9);
        assert_eq!(chart.bar_width(20), 4);
        assert_eq!(chart.bar_width(3), 1);
    }

    #[test]
    fn test_bar_width_with_thousands_of_categories() {
        let rows: Vec<(String, String)> = (0..70_000)
            .map(|i| (format!("friend {i}"), format!("{}", i % 2)))
            .collect();
        let fig = BarFigure {
            series: GroupedSeries::counts(rows.iter().map(|(x, g)| (Some(x.as_str()), Some(g.as_str())))),
            ..figure()
        };
        let chart = BarsChart::new(&fig);
        assert_eq!(chart.bar_width(80), 1);
        // one column per bar, two bars and a gap per category
        assert_eq!(chart.fitting_groups(80), 20);

        let area = Rect::new(0, 0, 80, BarsChart::HEIGHT);
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf);
        let line: String = (0..80).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(line.contains("+69981 more categories not shown"));
    }

    #[test]
    fn test_bars_render_legend_and_labels() {
        let fig = figure();
        let area = Rect::new(0, 0, 60, BarsChart::HEIGHT);
        let mut buf = Buffer::empty(area);
        BarsChart::new(&fig).render(area, &mut buf);
        let line = |y: u16| -> String { (0..60).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(line(1).contains("Failure in Life (1=Yes, 0=No): ■ 0"));
        assert!(line(2).contains("Average Age Midpoint"));
        let labels = line(BarsChart::HEIGHT - 2);
        assert!(labels.contains("Good"));
        assert!(labels.contains("Poor"));
    }
}
