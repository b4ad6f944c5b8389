//! Event handling utilities.
//!
//! Maps crossterm key events onto dashboard actions and provides shared
//! scroll handling logic.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    /// Jump to the page at this sidebar index.
    GoTo(usize),
    Reload,
}

/// Trait for types that support scrolling.
///
/// Provides a unified interface for scroll operations across different views.
pub trait Scrollable {
    fn scroll_down(&mut self);
    fn scroll_up(&mut self);
    fn scroll_page_down(&mut self);
    fn scroll_page_up(&mut self);
}

/// Handles scroll navigation keys for any Scrollable type.
///
/// Returns `true` if the key was handled, `false` otherwise.
pub fn handle_scroll_key<S: Scrollable>(state: &mut S, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up();
            true
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            state.scroll_page_down();
            true
        }
        KeyCode::PageUp => {
            state.scroll_page_up();
            true
        }
        _ => false,
    }
}

/// Checks if the event is a quit command (`q`, `Esc` or `Ctrl-C`).
pub fn is_quit_event(event: &Event) -> bool {
    match event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) => modifiers.contains(KeyModifiers::CONTROL),
        Event::Key(KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        }) => true,
        _ => false,
    }
}

/// Translates a key press into a dashboard action.
///
/// Scroll keys are not actions; they go to the active view.
pub fn key_action(event: &Event) -> Option<Action> {
    if is_quit_event(event) {
        return Some(Action::Quit);
    }
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Tab => Some(Action::NextPage),
        KeyCode::BackTab => Some(Action::PrevPage),
        KeyCode::Char(c @ '1'..='9') => Some(Action::GoTo(c as usize - '1' as usize)),
        KeyCode::Char('r') => Some(Action::Reload),
        _ => None,
    }
}
