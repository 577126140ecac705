//! Footer with view tabs and keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::View;

/// Renders the status bar.
///
/// The active view is highlighted among the tabs on the left. Hints on the
/// right name the keys that matter for the view, plus the grow setting in
/// the table view.
pub fn render_status_bar(view: View, grow_to_block: bool, area: Rect, buf: &mut Buffer) {
    let [tabs_area, hints_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let mut tabs = Vec::new();
    for candidate in View::ALL {
        let style = if candidate == view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tabs.push(Span::styled(format!(" {} ", candidate.title()), style));
        tabs.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(tabs)).render(tabs_area, buf);

    let mut hints = Vec::new();
    let mut hint = |key: &'static str, text: String| {
        hints.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        hints.push(Span::styled(format!(" {text}  "), Style::default().fg(Color::DarkGray)));
    };
    match view {
        View::Table => {
            let grow = if grow_to_block { "on" } else { "off" };
            hint("[g]", format!("grow {grow}"));
            hint("[[ ]]", "day".to_string());
        }
        View::Running => hint("[0-9]", "time".to_string()),
        View::Channel => hint("[←→]", "channel".to_string()),
    }
    hint("[?]", "help".to_string());

    Paragraph::new(Line::from(hints))
        .alignment(Alignment::Right)
        .render(hints_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_lines;

    #[test]
    fn active_view_is_highlighted() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(View::Running, true, area, &mut buf);

        let line = &buffer_lines(&buf)[0];
        assert!(line.starts_with(" Programme Table   Running   Channel "));
        // " Programme Table " plus a spacer puts " Running " at column 18.
        assert_eq!(buf.cell((19, 0)).unwrap().bg, Color::Cyan);
        assert_eq!(buf.cell((1, 0)).unwrap().bg, Color::Reset);
        assert!(line.contains("[0-9] time"));
    }

    #[test]
    fn table_hints_show_grow_setting() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(View::Table, false, area, &mut buf);

        let line = &buffer_lines(&buf)[0];
        assert!(line.contains("[g] grow off"));
        assert!(line.contains("[?] help"));
    }
}
