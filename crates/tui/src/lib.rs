//! Terminal UI for the tvgrid programme guide.
//!
//! This crate provides a Ratatui-based terminal interface for browsing a
//! TV schedule: a time-blocked programme table, a list of what is on air at
//! a chosen time, and a per-channel listing.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`layout`]: Shared layout measurements
//! - [`widgets`]: Rendering functions for every view
//!
//! # Example
//!
//! ```no_run
//! use tvgrid_config::Config;
//! use tvgrid_protocol::dummy::dummy_schedule;
//! use tvgrid_tui::{App, app::current_minute, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let now = current_minute();
//!     let mut app = App::new(dummy_schedule(now.date()), Config::default(), now);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use state::{AppState, View};
