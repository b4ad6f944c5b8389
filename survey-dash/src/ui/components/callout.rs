//! Coloured message boxes for success, info, warning and error text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};

use crate::ui::{
    colors,
    layout::{row_count, wrap_lines},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Success,
    Info,
    Warning,
    Error,
}

impl CalloutKind {
    fn color(self) -> ratatui::style::Color {
        match self {
            CalloutKind::Success => colors::SUCCESS,
            CalloutKind::Info => colors::INFO,
            CalloutKind::Warning => colors::WARNING,
            CalloutKind::Error => colors::ERROR,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            CalloutKind::Success => " ✔ ",
            CalloutKind::Info => " ℹ ",
            CalloutKind::Warning => " ⚠ ",
            CalloutKind::Error => " ✖ ",
        }
    }
}

pub struct Callout<'a> {
    kind: CalloutKind,
    text: &'a str,
}

impl<'a> Callout<'a> {
    pub fn new(kind: CalloutKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// Rows needed at `width`: wrapped text plus the border.
    pub fn height(&self, width: u16) -> u16 {
        row_count(wrap_lines(self.text, width.saturating_sub(4)).len()).saturating_add(2)
    }
}

impl Widget for Callout<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.kind.color();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Line::from(self.kind.icon()).fg(color).bold())
            .padding(Padding::horizontal(1));

        let lines: Vec<Line> = wrap_lines(self.text, area.width.saturating_sub(4))
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(lines)
            .style(Style::default().fg(color))
            .block(block)
            .render(area, buf);
    }
}
