// lib.rs
use std::backtrace::Backtrace;
use std::panic;
use std::sync::OnceLock;
use tokio::runtime::Runtime;
use tracing::error;

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod log;
pub mod pages;
pub mod ui;

pub use error::{Error, Result};

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Process-wide Tokio runtime used for dataset fetches.
pub fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| Runtime::new().expect("create Tokio runtime"))
}

/// Logs panics with a backtrace before handing over to the default hook.
pub fn install_panic_hook() {
    let default = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        ui::session::restore_terminal();
        let bt = Backtrace::force_capture();
        error!(target: "panic",
               "panic: {panic_info}\n\nBacktrace:\n{bt}");
        default(panic_info);
    }));
}
