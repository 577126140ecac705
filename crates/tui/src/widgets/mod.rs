//! Widget components for the tvgrid TUI.
//!
//! The widget system follows a functional rendering approach where each widget
//! is a pure function that renders state to a buffer. This enables easy testing
//! and composition.
//!
//! # Modules
//!
//! - [`programme_table`]: The time-block programme table and its painter
//! - [`running_list`]: Programmes on air at a point in time
//! - [`channel_list`]: One channel's programmes for a day
//! - [`detail`]: The programme detail popup
//! - [`status_bar`]: The footer with view tabs and keybinding hints
//! - [`help`]: The help overlay
//!
//! # Colour Coding
//!
//! Programmes are coloured by where they lie relative to the current time:
//!
//! | Timing | Color |
//! |--------|-------|
//! | `Past` | Gray (`Color::DarkGray`) |
//! | `Running` | Yellow (`Color::Yellow`) |
//! | `Upcoming` | White (`Color::White`) |

pub mod channel_list;
pub mod detail;
pub mod help;
pub mod programme_table;
pub mod running_list;
pub mod status_bar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use tvgrid_protocol::{Programme, Timing};

// Re-export primary rendering functions for convenience
pub use channel_list::render_channel_list;
pub use detail::render_detail_panel;
pub use help::render_help_overlay;
pub use programme_table::{ProgrammeTable, TerminalPainter, render_programme_table};
pub use running_list::render_running_list;
pub use status_bar::render_status_bar;

/// Returns the base style for a programme's timing.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use tvgrid_protocol::{Programme, Timing};
/// use tvgrid_tui::widgets::timing_style;
///
/// assert_eq!(timing_style(Timing::Past).fg, Some(Color::DarkGray));
/// ```
#[must_use]
pub fn timing_style(timing: Timing) -> Style {
    match timing {
        Timing::Past => Style::default().fg(Color::DarkGray),
        Timing::Running => Style::default().fg(Color::Yellow),
        Timing::Upcoming => Style::default().fg(Color::White),
    }
}

/// Formats a programme's start and end as `HH:MM-HH:MM`.
pub(crate) fn time_range(programme: &Programme) -> String {
    format!(
        "{}-{}",
        programme.start.format("%H:%M"),
        programme.end.format("%H:%M")
    )
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

/// Returns the first line to show so `selected` stays visible.
pub(crate) fn list_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        (selected + 1).saturating_sub(visible)
    }
}

/// Renders lines in a block, highlighting and scrolling to `selected`.
pub(crate) fn render_selectable(
    block: Block<'_>,
    mut lines: Vec<Line<'_>>,
    selected: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    let inner = block.inner(area);
    block.render(area, buf);

    let offset = selected.map_or(0, |s| list_offset(s, usize::from(inner.height)));
    if let Some(line) = selected.and_then(|s| lines.get_mut(s)) {
        let patched = std::mem::take(line).patch_style(Style::default().add_modifier(Modifier::REVERSED));
        *line = patched;
    }

    let visible: Vec<Line<'_>> = lines
        .into_iter()
        .skip(offset)
        .take(usize::from(inner.height))
        .collect();
    Paragraph::new(visible).render(inner, buf);
}

#[cfg(test)]
mod tests;
