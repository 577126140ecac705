//! Centralized layout measurements for the TUI.
//!
//! Shared row and column budgets used by the app frame and its widgets.

/// Height of the header bar in rows.
///
/// The header shows the application title, the day and the clock.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_HEIGHT: u16 = 1;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message. The
/// table needs its channel header, a handful of body rows and the status
/// bar.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Enough for the time gutter and at least one readable channel column.
pub const MIN_WIDTH: u16 = 40;
