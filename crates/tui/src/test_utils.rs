//! Test utilities for the TUI crate.
//!
//! Helpers for turning rendered buffers into text that tests can assert on
//! or snapshot.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes a line in the output string. Trailing
/// whitespace is trimmed from each line.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for line in buffer_lines(buf) {
        result.push_str(&line);
        result.push('\n');
    }
    result
}

/// Returns the rows of a [`Buffer`] as strings with trailing spaces trimmed.
///
/// Suited to `insta::assert_debug_snapshot!`, which prints one quoted row
/// per line.
#[must_use]
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            let row: String = (0..buf.area.width)
                .filter_map(|x| buf.cell((buf.area.x + x, buf.area.y + y)))
                .map(|cell| cell.symbol())
                .collect();
            row.trim_end_matches(' ').to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn rows_are_trimmed() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 2));
        buf.set_string(0, 0, "Hello", Style::default());

        assert_eq!(buffer_lines(&buf), vec!["Hello".to_string(), String::new()]);
        assert_eq!(buffer_to_string(&buf), "Hello\n\n");
    }
}
