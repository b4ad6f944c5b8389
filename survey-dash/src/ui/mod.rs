//! UI module for the survey dashboard.
//!
//! This module provides a ratatui-based terminal UI: a page menu on the
//! left, the selected page in a scroll view on the right and a help bar
//! along the bottom.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         session.rs                              │
//! │  run ─── event_loop ─── App ─── CrosstermBackend                │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          views/                                 │
//! │  View trait ─── PageView ─── LoadingView                        │
//! │                    │                                            │
//! │              ScrollViewState                                    │
//! └────────────────────┼────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 components/          charts/                    │
//! │  Callout ─ MetricCards ─ Preview    Histogram ─ Pie ─ Heatmap   │
//! │  Sidebar ─ HelpBar ─ Gauge          Bars ─ Box                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `session` - terminal setup, App state and the event loop
//! - `views` - View trait and implementations (Page, Loading)
//! - `components` - Reusable UI widgets
//! - `charts` - One widget per chart figure
//! - `events` - Key mapping and scroll handling
//! - `layout` - Layout calculation and text wrapping
//! - `colors` - Theme colors and chart palettes

pub mod charts;
pub mod colors;
pub mod components;
pub mod events;
pub mod layout;
pub mod session;
pub mod views;

pub use session::run;
