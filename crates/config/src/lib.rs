//! Configuration management for the tvgrid application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files and built-in defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`table`]: Programme table sizes and row blocking
//! - [`guide`]: Time presets and the refresh interval
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./tvgrid.json5` or `./tvgrid.json`)
//! 2. User config (`~/.config/tvgrid/config.json5` or `~/.config/tvgrid/config.json`)
//! 3. Built-in defaults
//!
//! The first file found wins; files are not merged.
//!
//! # File Format
//!
//! ```json5
//! {
//!   table: {
//!     block_size: 3,       // hours per row
//!     hours: 28,           // midnight until 04:00 the next day
//!     column_width: 18,
//!     grow_to_block: true,
//!   },
//!   guide: {
//!     time_buttons: ["06:00", "12:00", "20:15"],
//!     refresh_secs: 60,
//!   },
//!   schedule_path: "guide.json",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use tvgrid_config::Config;
//!
//! # async fn example() -> tvgrid_config::Result<()> {
//! let config = Config::load().await?;
//! let options = config.table.options();
//! println!("{} rows", options.row_count());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod guide;
pub mod persistence;
pub mod table;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use guide::GuideConfig;
pub use table::TableConfig;
