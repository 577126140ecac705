//! Shared protocol types for the tvgrid application.
//!
//! This crate defines the core types used across all tvgrid components:
//! channels, programmes, the schedule holding them, time-of-day helpers,
//! TUI messages and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`channel`]: Channel identifiers and the `Channel` struct
//! - [`programme`]: The `Programme` struct and its timing relative to "now"
//! - [`schedule`]: The `Schedule` with its day, channel and running queries
//! - [`time`]: Times of day and hour arithmetic relative to a displayed day
//! - [`message`]: TUI event messages
//! - [`dummy`]: Demonstration data
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Building a schedule and asking what is on:
//!
//! ```
//! use chrono::NaiveDate;
//! use tvgrid_protocol::{Channel, Programme, Schedule, TimeOfDay};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let at = |hh: &str| TimeOfDay::parse(hh).unwrap().on(day);
//!
//! let mut schedule = Schedule::new();
//! schedule.add_channel(Channel::new(1, "Das Erste"));
//! schedule.add_programme(Programme::new(1, at("20:00"), at("20:15"), "Tagesschau"));
//! schedule.add_programme(Programme::new(1, at("20:15"), at("21:45"), "Tatort"));
//!
//! let running = schedule.running_at(at("20:30"));
//! assert_eq!(running.len(), 1);
//! assert_eq!(running[0].title, "Tatort");
//! ```

pub mod channel;
pub mod dummy;
pub mod error;
pub mod message;
pub mod programme;
pub mod schedule;
pub mod time;

// Re-export primary types at crate root for convenience
pub use channel::{Channel, ChannelId};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use programme::{Programme, ProgrammeId, Timing};
pub use schedule::Schedule;
pub use time::{TimeOfDay, hours_since, truncate_to_minute};
