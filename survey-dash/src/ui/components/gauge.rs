//! Reusable gauge widget factory.

use ratatui::{
    style::{palette::tailwind, Color, Style},
    widgets::Gauge,
};

/// Predefined gauge color schemes.
#[derive(Clone, Copy)]
pub enum GaugeStyle {
    /// Fetch time against the request timeout.
    Timeout,
    /// Share of a chart series, drawn in the series color.
    Series(Color),
}

impl GaugeStyle {
    fn color(self) -> Color {
        match self {
            GaugeStyle::Timeout => tailwind::SKY.c500,
            GaugeStyle::Series(c) => c,
        }
    }
}

/// Creates a styled gauge widget with consistent appearance.
///
/// # Arguments
/// * `label` - Label prefix (e.g., a pie slice name)
/// * `percent` - Value as percentage (0.0 - 100.0)
/// * `style` - Color scheme to use
///
/// # Example
/// ```ignore
/// let gauge = make_gauge("Not Married", 67.9, GaugeStyle::Series(color));
/// ```
pub fn make_gauge(label: &str, percent: f64, style: GaugeStyle) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(style.color()).bg(tailwind::GRAY.c800))
        .label(format!("{label}: {percent:.1}%"))
        .use_unicode(true)
        .ratio((percent / 100.0).clamp(0.0, 1.0))
}
