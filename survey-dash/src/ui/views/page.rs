//! Scrollable page body.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{palette::tailwind, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
    Frame,
};
use tui_widgets::scrollview::{ScrollView, ScrollViewState};

use super::View;
use crate::{
    data::Dataset,
    pages::{self, Element, Page},
    ui::{
        charts::FigureView,
        colors,
        components::{page_hints, Callout, CalloutKind, MetricCards, PreviewTable},
        events::{handle_scroll_key, Scrollable},
        layout::{row_count, wrap_lines},
    },
};

/// Blank rows between elements.
const GAP: u16 = 1;

/// A page rendered against one dataset snapshot.
///
/// Elements are computed once on construction; a reload builds a new view.
pub struct PageView {
    elements: Vec<Element>,
    scroll: ScrollViewState,
}

impl PageView {
    pub fn new(page: &Page, dataset: &Dataset) -> Self {
        Self {
            elements: pages::render(page, dataset),
            scroll: ScrollViewState::default(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Total content height at `width`, gaps included.
    pub fn content_height(&self, width: u16) -> u16 {
        self.elements
            .iter()
            .map(|e| ElementView::new(e).height(width).saturating_add(GAP))
            .fold(0, u16::saturating_add)
    }
}

impl Scrollable for PageView {
    fn scroll_down(&mut self) {
        self.scroll.scroll_down();
    }
    fn scroll_up(&mut self) {
        self.scroll.scroll_up();
    }
    fn scroll_page_down(&mut self) {
        self.scroll.scroll_page_down();
    }
    fn scroll_page_up(&mut self) {
        self.scroll.scroll_page_up();
    }
}

impl View for PageView {
    fn on_event(&mut self, ev: &Event) -> bool {
        let Event::Key(key) = ev else {
            return matches!(ev, Event::Resize(_, _));
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('g') | KeyCode::Home => {
                self.scroll.scroll_to_top();
                true
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.scroll.scroll_to_bottom();
                true
            }
            code => handle_scroll_key(self, code),
        }
    }

    fn draw(&mut self, f: &mut Frame, area: Rect) {
        // one column is kept for the vertical scrollbar
        let width = area.width.saturating_sub(1);
        let height = self.content_height(width);
        let mut sv = ScrollView::new(Size::new(width, height));

        let mut y: u16 = 0;
        for element in &self.elements {
            let view = ElementView::new(element);
            let h = view.height(width);
            if y.saturating_add(h) > height {
                break;
            }
            sv.render_widget(view, Rect::new(0, y, width, h));
            y = y.saturating_add(h).saturating_add(GAP);
        }

        f.render_stateful_widget(sv, area, &mut self.scroll);
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        page_hints()
    }
}

/// Height and drawing of one page element.
struct ElementView<'a> {
    element: &'a Element,
}

impl<'a> ElementView<'a> {
    fn new(element: &'a Element) -> Self {
        Self { element }
    }

    fn height(&self, width: u16) -> u16 {
        let text_rows = |s: &str| row_count(wrap_lines(s, width).len());
        match self.element {
            // heading plus rule
            Element::Title(s) => text_rows(s).saturating_add(1),
            Element::Subheader(s) | Element::Markdown(s) => text_rows(s),
            Element::Success(s) => Callout::new(CalloutKind::Success, s).height(width),
            Element::Info(s) => Callout::new(CalloutKind::Info, s).height(width),
            Element::Warning(s) => Callout::new(CalloutKind::Warning, s).height(width),
            Element::Error(s) => Callout::new(CalloutKind::Error, s).height(width),
            Element::Divider => 1,
            Element::Metrics(m) => MetricCards::new(m).height(width),
            Element::Preview(p) => PreviewTable::new(p).height(),
            Element::Chart(fig) => FigureView::new(fig).height(width),
        }
    }
}

impl Widget for ElementView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = |s: &str, style: Style| -> Vec<Line<'static>> {
            wrap_lines(s, area.width)
                .into_iter()
                .map(|l| Line::styled(l, style))
                .collect()
        };
        match self.element {
            Element::Title(s) => {
                let style = Style::default()
                    .fg(colors::HEADER)
                    .add_modifier(Modifier::BOLD);
                let mut text = lines(s, style);
                text.push(Line::styled(
                    "━".repeat(usize::from(area.width)),
                    Style::default().fg(colors::HEADER),
                ));
                Paragraph::new(text).render(area, buf);
            }
            Element::Subheader(s) => {
                let style = Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD);
                Paragraph::new(lines(s, style)).render(area, buf);
            }
            Element::Markdown(s) => {
                let style = Style::default().fg(tailwind::GRAY.c300);
                Paragraph::new(lines(s, style)).render(area, buf);
            }
            Element::Success(s) => Callout::new(CalloutKind::Success, s).render(area, buf),
            Element::Info(s) => Callout::new(CalloutKind::Info, s).render(area, buf),
            Element::Warning(s) => Callout::new(CalloutKind::Warning, s).render(area, buf),
            Element::Error(s) => Callout::new(CalloutKind::Error, s).render(area, buf),
            Element::Divider => {
                Line::styled(
                    "─".repeat(usize::from(area.width)),
                    Style::default().fg(colors::GRAY),
                )
                .render(area, buf);
            }
            Element::Metrics(m) => MetricCards::new(m).render(area, buf),
            Element::Preview(p) => PreviewTable::new(p).render(area, buf),
            Element::Chart(fig) => FigureView::new(fig).render(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    use crate::data::Table;

    fn dataset() -> Dataset {
        let csv = "age_midpoint,marital_status,education_level,mental_health_status\n\
                   22.5,Not Married,Undergrad,Poor\n\
                   27.5,Married,Postgrad,Good\n\
                   17.5,Not Married,Undergrad,Poor\n";
        Dataset {
            url: "fixture.csv".into(),
            table: Arc::new(Table::from_csv(csv.as_bytes()).unwrap()),
            error: None,
            loaded_at: Local::now(),
        }
    }

    fn screen(term: &Terminal<TestBackend>) -> String {
        let buf = term.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_content_height_sums_elements() {
        let view = PageView::new(pages::find("main"), &dataset());
        let total: u16 = view
            .elements()
            .iter()
            .map(|e| ElementView::new(e).height(80) + GAP)
            .sum();
        assert_eq!(view.content_height(80), total);
        assert!(total > 40);
    }

    #[test]
    fn test_page_draws_title_and_preview() {
        let mut view = PageView::new(pages::find("main"), &dataset());
        let mut term = Terminal::new(TestBackend::new(81, 30)).unwrap();
        term.draw(|f| view.draw(f, f.area())).unwrap();
        let text = screen(&term);
        assert!(text.contains("Drug Use Demographics and Key Triggers Analysis"));
        assert!(text.contains("Data Preview"));
        assert!(text.contains("Not Married"));
    }

    #[test]
    fn test_scrolling_moves_content() {
        let mut view = PageView::new(pages::find("main"), &dataset());
        let mut term = Terminal::new(TestBackend::new(81, 20)).unwrap();
        term.draw(|f| view.draw(f, f.area())).unwrap();
        assert!(screen(&term).contains("Drug Use Demographics"));

        let page_down = Event::Key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
        assert!(view.on_event(&page_down));
        term.draw(|f| view.draw(f, f.area())).unwrap();
        assert!(!screen(&term).contains("Drug Use Demographics"));

        let top = Event::Key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE));
        assert!(view.on_event(&top));
        term.draw(|f| view.draw(f, f.area())).unwrap();
        assert!(screen(&term).contains("Drug Use Demographics"));
    }

    #[test]
    fn test_high_cardinality_page_fits() {
        // 923 religions x 71 substances, every pair once
        let mut csv = String::from("religion,addicted_with,age_of_first_use_midpoint\n");
        for r in 0..923 {
            for a in 0..71 {
                csv.push_str(&format!("religion {r},substance {a},{}\n", 15 + (r + a) % 10));
            }
        }
        let dataset = Dataset {
            table: Arc::new(Table::from_csv(csv.as_bytes()).unwrap()),
            ..dataset()
        };
        let mut view = PageView::new(pages::find("correlations"), &dataset);

        let boxes = view
            .elements()
            .iter()
            .find_map(|e| match e {
                Element::Chart(fig @ crate::charts::Figure::Box(_)) => Some(fig),
                _ => None,
            })
            .unwrap();
        let box_height = FigureView::new(boxes).height(80);
        assert!(box_height < 60);
        assert!(view.content_height(80) > box_height);

        let mut term = Terminal::new(TestBackend::new(81, 40)).unwrap();
        let end = Event::Key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        term.draw(|f| view.draw(f, f.area())).unwrap();
        assert!(view.on_event(&end));
        term.draw(|f| view.draw(f, f.area())).unwrap();
        assert!(screen(&term).contains("more boxes not shown"));
    }

    #[test]
    fn test_missing_column_warning_is_drawn() {
        let mut view = PageView::new(pages::find("social"), &dataset());
        let mut term = Terminal::new(TestBackend::new(81, 60)).unwrap();
        term.draw(|f| view.draw(f, f.area())).unwrap();
        assert!(screen(&term).contains("One or more required columns"));
    }
}
