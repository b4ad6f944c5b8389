use std::{fs::File, path::Path, sync::OnceLock};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{Error, Result};

pub const LOG_FILE: &str = "survey-dash.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Routes tracing output to `<log_dir>/survey-dash.log`.
///
/// The terminal is owned by the UI, so nothing is written to stdout/stderr.
/// Level comes from `RUST_LOG`, defaulting to `info`. Calling this twice is
/// a no-op.
pub fn setup_logger(log_dir: &Path) -> Result<()> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let path = log_dir.join(LOG_FILE);
    let file = File::create(&path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(non_blocking_writer)
        .with_filter(filter);

    LOG_GUARD.set(guard).ok();

    tracing_subscriber::registry().with(file_layer).try_init().ok();

    Ok(())
}
