//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::widgets::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 44;

/// Key column width inside the overlay.
const KEY_WIDTH: usize = 12;

const NAVIGATION: &[(&str, &str)] = &[
    ("← →", "Column, channel or time"),
    ("↑ ↓", "Previous / next programme"),
    ("PgUp PgDn", "Scroll a page"),
    ("[ ]", "Previous / next day"),
];

const VIEWS: &[(&str, &str)] = &[
    ("Tab", "Next view"),
    ("t o c", "Table, running, channel"),
    ("1-9", "Running at preset time"),
    ("0", "Running now"),
];

const ACTIONS: &[(&str, &str)] = &[
    ("Enter", "Programme details"),
    ("Esc", "Close popup"),
    ("g", "Grow blocks to rows"),
    ("r", "Refresh clock"),
    ("Ctrl+C", "Quit"),
    ("?", "Toggle help"),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is drawn on top of the existing content after clearing the
/// area behind it.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tvgrid_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = build_help_lines();
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup_area = centered_rect(HELP_WIDTH, height, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (title, bindings) in [("Navigation", NAVIGATION), ("Views", VIEWS), ("Actions", ACTIONS)] {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        lines.extend(bindings.iter().map(|&(key, action)| binding_line(key, action)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

fn binding_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<KEY_WIDTH$}"), Style::default().fg(Color::Green)),
        Span::styled(action, Style::default().fg(Color::White)),
    ])
}
