//! Placeholder shown while a fetch is in flight.

use std::time::{Duration, Instant};

use crossterm::event::Event;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::View;
use crate::ui::{
    colors,
    components::{loading_hints, make_gauge, GaugeStyle},
    layout::truncate,
};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingView {
    url: String,
    timeout: Duration,
    started: Instant,
}

impl LoadingView {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            url: url.to_owned(),
            timeout,
            started: Instant::now(),
        }
    }

    fn spinner(&self) -> &'static str {
        let frame = (self.started.elapsed().as_millis() / 100) as usize;
        SPINNER[frame % SPINNER.len()]
    }
}

impl View for LoadingView {
    fn on_event(&mut self, ev: &Event) -> bool {
        matches!(ev, Event::Resize(_, _))
    }

    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let [message, url, _, gauge] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);
        let [gauge] = Layout::horizontal([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(gauge);

        f.render_widget(
            Paragraph::new(Line::styled(
                format!("{} Loading survey data…", self.spinner()),
                Style::default()
                    .fg(colors::HEADER)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            message,
        );
        f.render_widget(
            Paragraph::new(Line::styled(
                truncate(&self.url, usize::from(area.width)),
                Style::default().fg(colors::GRAY),
            ))
            .centered(),
            url,
        );

        let elapsed = self.started.elapsed().as_secs_f64();
        let budget = self.timeout.as_secs_f64().max(1.0);
        f.render_widget(
            make_gauge("timeout", elapsed / budget * 100.0, GaugeStyle::Timeout),
            gauge,
        );
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        loading_hints()
    }
}
