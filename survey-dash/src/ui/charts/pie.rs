//! Donut chart drawn on a braille canvas, with a share legend.

use std::f64::consts::TAU;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Widget,
    },
};

use super::chart_block;
use crate::{
    charts::{Palette, PieFigure},
    ui::{
        colors,
        components::{make_gauge, GaugeStyle},
    },
};

/// Sample grid resolution per axis for the canvas.
const SAMPLES: usize = 160;

pub struct PieChart<'a> {
    fig: &'a PieFigure,
}

impl<'a> PieChart<'a> {
    pub const HEIGHT: u16 = 14;

    pub fn new(fig: &'a PieFigure) -> Self {
        Self { fig }
    }

    fn slice_color(i: usize) -> Color {
        colors::series_color(Palette::T10, i)
    }

    /// Point sets per slice, in `[-1, 1]` canvas coordinates.
    ///
    /// Slices start at twelve o'clock and run clockwise, largest first.
    fn slice_points(&self) -> Vec<Vec<(f64, f64)>> {
        let shares = self.fig.shares();
        let mut bounds = Vec::with_capacity(shares.len());
        let mut acc = 0.0;
        for s in &shares {
            acc += s / 100.0;
            bounds.push(acc * TAU);
        }

        let mut points = vec![Vec::new(); shares.len()];
        if shares.is_empty() {
            return points;
        }
        let step = 2.0 / SAMPLES as f64;
        for i in 0..=SAMPLES {
            for j in 0..=SAMPLES {
                let x = -1.0 + step * i as f64;
                let y = -1.0 + step * j as f64;
                let r = (x * x + y * y).sqrt();
                if r > 1.0 || r < self.fig.hole {
                    continue;
                }
                // angle from 12 o'clock, clockwise
                let theta = x.atan2(y).rem_euclid(TAU);
                let slice = bounds
                    .iter()
                    .position(|b| theta < *b)
                    .unwrap_or(shares.len() - 1);
                points[slice].push((x, y));
            }
        }
        points
    }
}

impl Widget for PieChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fig = self.fig;
        let block = chart_block(fig.title, "");
        let inner = block.inner(area);
        block.render(area, buf);

        if fig.slices.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "no values",
                Style::default().fg(colors::GRAY),
            );
            return;
        }

        // terminal cells are about twice as tall as wide
        let disc_w = (inner.height * 2 + 2).min(inner.width / 2);
        let [disc, _gap, legend] = Layout::horizontal([
            Constraint::Length(disc_w),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let slices = self.slice_points();
        Canvas::default()
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .marker(Marker::Braille)
            .paint(|ctx| {
                for (i, coords) in slices.iter().enumerate() {
                    ctx.draw(&Points {
                        coords,
                        color: Self::slice_color(i),
                    });
                }
            })
            .render(disc, buf);

        let shares = fig.shares();
        let rows = usize::from(legend.height);
        for (i, ((label, _), share)) in fig.slices.iter().zip(&shares).enumerate() {
            if i >= rows {
                break;
            }
            let row = Rect::new(legend.x, legend.y + i as u16, legend.width, 1);
            if i + 1 == rows && fig.slices.len() > rows {
                let more = fig.slices.len() - i;
                buf.set_string(row.x, row.y, format!("+{more} more"), Style::default().fg(colors::GRAY));
                break;
            }
            make_gauge(label, *share, GaugeStyle::Series(Self::slice_color(i))).render(row, buf);
        }
    }
}
