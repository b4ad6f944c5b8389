//! Layout utilities for UI components.
//!
//! Provides shared layout calculations and helper functions used across views.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
};

/// Width of the page menu.
pub const SIDEBAR_WIDTH: u16 = 34;

/// Maximum width for label columns (heatmap rows, box plot categories).
pub const MAX_TITLE_WIDTH: u16 = 28;

/// Splits the screen into [sidebar, body] above a one-line help bar.
pub fn screen_split(area: Rect) -> (Rect, Rect, Rect) {
    let [main, help] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    let sidebar_width = SIDEBAR_WIDTH.min(main.width / 3);
    let [sidebar, body] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Fill(1)]).areas(main);
    (sidebar, body, help)
}

/// Clamps a row or column count into the `u16` range the layout works in.
pub fn row_count(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Calculates the optimal column width for a list of names.
///
/// Returns the width of the longest name (plus padding), clamped to MAX_TITLE_WIDTH.
pub fn calculate_name_width<'a>(names: impl Iterator<Item = &'a str>, padding: u16) -> u16 {
    names
        .map(|name| row_count(Line::from(name).width()).saturating_add(padding))
        .max()
        .unwrap_or(1)
        .clamp(1, MAX_TITLE_WIDTH)
}

/// Greedy word wrap into lines no wider than `width` columns.
///
/// Explicit newlines are kept. Words longer than a line are split.
pub fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if len > 0 {
                    out.push(std::mem::take(&mut line));
                    len = 0;
                }
                let rest = word.split_off(width);
                out.push(word.into_iter().collect());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }
            if len > 0 && len + 1 + word.len() > width {
                out.push(std::mem::take(&mut line));
                len = 0;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            len += word.len();
            line.extend(word);
        }
        out.push(line);
    }
    out
}

/// Truncates `s` to `width` columns, marking the cut with '…'.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_name_width() {
        let names = vec!["short", "medium-name", "very-long-name-here"];
        let width = calculate_name_width(names.iter().map(|s| *s), 2);

        // "very-long-name-here" is 19 chars + 2 padding = 21
        assert_eq!(width, 21);

        let long = ["Pre-degree/Undergraduate and more besides"];
        assert_eq!(calculate_name_width(long.iter().copied(), 1), MAX_TITLE_WIDTH);
    }

    #[test]
    fn test_wrap_lines() {
        assert_eq!(
            wrap_lines("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_lines("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_lines("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Not Married", 20), "Not Married");
        assert_eq!(truncate("Not Married", 5), "Not …");
    }

    #[test]
    fn test_screen_split() {
        let (sidebar, body, help) = screen_split(Rect::new(0, 0, 120, 40));
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(body.width, 120 - SIDEBAR_WIDTH);
        assert_eq!(help.height, 1);
        assert_eq!(help.y, 39);
    }
}
