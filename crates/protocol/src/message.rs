//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use tvgrid_protocol::Message;
///
/// let msg = Message::NextDay;
/// assert!(matches!(msg, Message::NextDay));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Scroll or move selection left.
    NavigateLeft,
    /// Scroll or move selection right.
    NavigateRight,
    /// Scroll or move selection up.
    NavigateUp,
    /// Scroll or move selection down.
    NavigateDown,
    /// Scroll or move selection up by a page.
    PageUp,
    /// Scroll or move selection down by a page.
    PageDown,
    /// Switch to the next view.
    NextView,
    /// Show the programme table.
    ShowTable,
    /// Show the programmes running now.
    ShowRunning,
    /// Show the per-channel listing.
    ShowChannel,
    /// Show the next day.
    NextDay,
    /// Show the previous day.
    PreviousDay,
    /// Toggle whether table blocks grow to fill their row.
    ToggleGrow,
    /// Show what runs at one of the configured times.
    RunningAt {
        /// Index into the configured time buttons.
        preset: usize,
    },
    /// Show what runs right now.
    RunningNow,
    /// Open details for the selected programme.
    Select,
    /// Go back to the previous view or cancel current action.
    Back,
    /// Escape: close panel or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Re-read the clock and refresh time-dependent views.
    Refresh,
    /// Toggle help overlay.
    ToggleHelp,
}
