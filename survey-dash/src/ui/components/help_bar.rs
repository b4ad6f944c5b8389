//! Inline context-aware help bar component.

use ratatui::{
    prelude::*,
    style::{palette::tailwind, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draws a context-aware inline help bar at the given area.
///
/// Takes a slice of (key, description) tuples and renders them as:
/// `key:desc │ key:desc │ ...`
pub fn draw_help_bar(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    let separator = Span::styled(" │ ", Style::default().fg(tailwind::GRAY.c600));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(separator.clone());
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(tailwind::YELLOW.c400)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(":{}", desc),
            Style::default().fg(tailwind::GRAY.c400),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        area,
    );
}

/// Help hints while a page is shown.
pub fn page_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j/k", "scroll"),
        ("PgUp/PgDn", "page"),
        ("Tab", "next page"),
        ("1-4", "jump"),
        ("g", "top"),
        ("r", "reload"),
        ("q", "quit"),
    ]
}

/// Help hints on the loading screen.
pub fn loading_hints() -> Vec<(&'static str, &'static str)> {
    vec![("q", "quit")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_help_bar_renders_hints() {
        let mut term = Terminal::new(TestBackend::new(40, 1)).unwrap();
        term.draw(|f| draw_help_bar(f, f.area(), &[("q", "quit"), ("r", "reload")]))
            .unwrap();
        let line: String = term
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(line.starts_with("q:quit │ r:reload"));
    }
}
