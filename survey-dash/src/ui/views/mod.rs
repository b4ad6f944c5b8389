//! View implementations for the dashboard.
//!
//! Each view is a self-contained unit with its own state and rendering logic.

mod loading;
mod page;

use std::time::Duration;

use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

pub use loading::LoadingView;
pub use page::PageView;

use crate::{data::Dataset, pages};

/// Trait for dashboard views.
///
/// Views handle events and render themselves to the terminal.
pub trait View: Send {
    /// Handles an input event.
    ///
    /// Returns `true` if the event was consumed and a redraw is needed.
    fn on_event(&mut self, ev: &Event) -> bool;

    /// Renders the view to the given frame area.
    fn draw(&mut self, f: &mut Frame, area: Rect);

    /// Key hints for the help bar.
    fn hints(&self) -> Vec<(&'static str, &'static str)>;
}

/// Creates the body view for a page.
///
/// # Arguments
/// * `page_id` - Page id: "home", "main", "social" or "correlations"
/// * `dataset` - Loaded dataset, or `None` while the fetch is running
///
/// # Returns
/// Boxed view instance. Unknown ids fall back to the default page.
pub fn make_view(page_id: &str, dataset: Option<&Dataset>, url: &str, timeout: Duration) -> Box<dyn View> {
    match dataset {
        Some(d) => Box::new(PageView::new(pages::find(page_id), d)),
        None => Box::new(LoadingView::new(url, timeout)),
    }
}
