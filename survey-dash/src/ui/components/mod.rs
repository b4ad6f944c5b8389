//! Reusable UI components.
//!
//! This module provides shared widgets and rendering utilities
//! that can be used across different views.

mod callout;
mod gauge;
mod help_bar;
mod metrics;
mod preview;
mod sidebar;

pub use callout::{Callout, CalloutKind};
pub use gauge::{make_gauge, GaugeStyle};
pub use help_bar::{draw_help_bar, loading_hints, page_hints};
pub use metrics::MetricCards;
pub use preview::PreviewTable;
pub use sidebar::draw_sidebar;
