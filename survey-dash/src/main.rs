//! Terminal dashboard for the addiction survey dataset.
//!
//! Usage:
//!   survey-dash [OPTIONS]
//!
//! Logs go to `<log-dir>/survey-dash.log`; set `RUST_LOG` to change the level.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use survey_dash::{
    config::{Config, Overrides},
    install_panic_hook, log, ui,
};

#[derive(Parser)]
#[command(name = "survey-dash")]
#[command(about = "Explore the drug addiction survey in the terminal", version)]
struct Cli {
    /// CSV source (http(s) URL or local path)
    #[arg(short, long, env = "SURVEY_DASH_URL")]
    url: Option<String>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page to open: home, main, social or correlations
    #[arg(short, long)]
    page: Option<String>,

    /// Directory for survey-dash.log
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Redraw interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .context("loading config")?
        .merge(Overrides {
            data_url: cli.url,
            page: cli.page,
            log_dir: cli.log_dir,
            tick_ms: cli.tick_ms,
        })
        .context("applying command line options")?;

    log::setup_logger(&config.log_dir).context("initialising logger")?;
    install_panic_hook();
    info!(url = %config.data_url, page = %config.default_page, "startup");

    ui::session::run(&config).context("running dashboard")?;

    info!("shutdown");
    Ok(())
}
