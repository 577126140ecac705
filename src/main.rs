//! tvgrid - a terminal TV programme guide.
//!
//! This is the main binary that launches the TUI application.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tvgrid_config::Config;
use tvgrid_protocol::{Schedule, dummy::dummy_schedule};
use tvgrid_tui::{App, app::current_minute, terminal};

/// Environment variable holding the log filter, e.g. `TVGRID_LOG=debug`.
const LOG_ENV: &str = "TVGRID_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    terminal::install_panic_hook();

    let config = Config::load().await.context("failed to load configuration")?;
    let now = current_minute();
    let schedule = load_schedule(&config, now.date())?;
    info!(
        channels = schedule.channels.len(),
        programmes = schedule.programmes.len(),
        "schedule loaded"
    );

    let mut terminal = terminal::setup_terminal()?;
    let mut app = App::new(schedule, config, now);

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Loads the configured schedule, or sample data when none is configured.
fn load_schedule(config: &Config, today: chrono::NaiveDate) -> anyhow::Result<Schedule> {
    let Some(path) = &config.schedule_path else {
        warn!("no schedule_path configured, showing sample data");
        return Ok(dummy_schedule(today));
    };
    Schedule::load(path)
        .with_context(|| format!("failed to load schedule from {}", path.display()))
}

/// Sends tracing output to `<cache dir>/tvgrid/tvgrid.log`.
///
/// The terminal belongs to the UI, so nothing is logged to stderr. Without
/// a cache directory logging stays off.
fn init_logging() -> anyhow::Result<()> {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("tvgrid")) else {
        return Ok(());
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("tvgrid.log"))
        .context("failed to open log file")?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
