//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tvgrid_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// Only key presses are handled. Key releases (reported on some
/// platforms), mouse and resize events map to `None`.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_message(*key),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (close popup or clear selection) |
/// | Arrows | Navigate |
/// | `PageUp` / `PageDown` | Scroll by a page |
/// | `Enter` or `Space` | Open details |
/// | `Backspace` | Back |
/// | `Tab` | Next view |
/// | `t` / `o` / `c` | Table, running, channel view |
/// | `[` / `]` | Previous / next day |
/// | `g` | Toggle block growing |
/// | `1`-`9` | Running at a configured time |
/// | `0` | Running now |
/// | `r` | Refresh |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::PageDown => Some(Message::PageDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),
        KeyCode::Backspace => Some(Message::Back),

        KeyCode::Tab => Some(Message::NextView),
        KeyCode::Char('t') => Some(Message::ShowTable),
        KeyCode::Char('o') => Some(Message::ShowRunning),
        KeyCode::Char('c') => Some(Message::ShowChannel),

        KeyCode::Char('[') => Some(Message::PreviousDay),
        KeyCode::Char(']') => Some(Message::NextDay),
        KeyCode::Char('g') => Some(Message::ToggleGrow),

        KeyCode::Char('0') => Some(Message::RunningNow),
        KeyCode::Char(digit @ '1'..='9') => digit
            .to_digit(10)
            .map(|d| Message::RunningAt { preset: d as usize - 1 }),

        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn control_does_not_leak_into_plain_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('g'),
                KeyModifiers::CONTROL
            )),
            None
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('c'))), Some(Message::ShowChannel));
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Left)), Some(Message::NavigateLeft));
        assert_eq!(key_to_message(make_key(KeyCode::Right)), Some(Message::NavigateRight));
        assert_eq!(key_to_message(make_key(KeyCode::Up)), Some(Message::NavigateUp));
        assert_eq!(key_to_message(make_key(KeyCode::Down)), Some(Message::NavigateDown));
        assert_eq!(key_to_message(make_key(KeyCode::PageUp)), Some(Message::PageUp));
        assert_eq!(key_to_message(make_key(KeyCode::PageDown)), Some(Message::PageDown));
    }

    #[test]
    fn selection_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), Some(Message::Select));
        assert_eq!(key_to_message(make_key(KeyCode::Char(' '))), Some(Message::Select));
        assert_eq!(key_to_message(make_key(KeyCode::Backspace)), Some(Message::Back));
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), Some(Message::Escape));
    }

    #[test]
    fn view_and_day_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Tab)), Some(Message::NextView));
        assert_eq!(key_to_message(make_key(KeyCode::Char('t'))), Some(Message::ShowTable));
        assert_eq!(key_to_message(make_key(KeyCode::Char('o'))), Some(Message::ShowRunning));
        assert_eq!(key_to_message(make_key(KeyCode::Char('['))), Some(Message::PreviousDay));
        assert_eq!(key_to_message(make_key(KeyCode::Char(']'))), Some(Message::NextDay));
        assert_eq!(key_to_message(make_key(KeyCode::Char('g'))), Some(Message::ToggleGrow));
    }

    #[test]
    fn digit_keys_pick_time_presets() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('0'))), Some(Message::RunningNow));
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('1'))),
            Some(Message::RunningAt { preset: 0 })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('9'))),
            Some(Message::RunningAt { preset: 8 })
        );
    }

    #[test]
    fn other_action_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('r'))), Some(Message::Refresh));
        assert_eq!(key_to_message(make_key(KeyCode::Char('?'))), Some(Message::ToggleHelp));
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn event_to_message_handles_key_presses_only() {
        assert_eq!(
            event_to_message(&Event::Key(make_key(KeyCode::Enter))),
            Some(Message::Select)
        );

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..make_key(KeyCode::Enter)
        };
        assert_eq!(event_to_message(&Event::Key(release)), None);
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
    }
}
