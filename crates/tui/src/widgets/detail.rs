//! Programme detail popup.
//!
//! Shows everything known about one programme on top of the current view.

use chrono::NaiveDateTime;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tvgrid_protocol::{Programme, Timing};

use crate::widgets::programme_table::wrap_text;
use crate::widgets::{centered_rect, time_range, timing_style};

/// The width of the detail popup.
const DETAIL_WIDTH: u16 = 56;

/// The maximum height of the detail popup.
const DETAIL_MAX_HEIGHT: u16 = 20;

/// Describes where a programme stands relative to `now`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tvgrid_protocol::Programme;
/// use tvgrid_tui::widgets::detail::status_text;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let programme = Programme::new(
///     1,
///     day.and_hms_opt(20, 15, 0).unwrap(),
///     day.and_hms_opt(21, 45, 0).unwrap(),
///     "Tatort",
/// );
///
/// assert_eq!(status_text(&programme, day.and_hms_opt(21, 0, 0).unwrap()), "On air, 45 min left");
/// assert_eq!(status_text(&programme, day.and_hms_opt(18, 15, 0).unwrap()), "Starts in 2 h");
/// ```
#[must_use]
pub fn status_text(programme: &Programme, now: NaiveDateTime) -> String {
    match programme.timing(now) {
        Timing::Past => "Ended".to_string(),
        Timing::Running => {
            let left = (programme.end - now).num_minutes();
            format!("On air, {left} min left")
        }
        Timing::Upcoming => format!("Starts in {}", format_minutes((programme.start - now).num_minutes())),
    }
}

fn format_minutes(minutes: i64) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

/// Renders the detail popup for `programme`, centered in `area`.
///
/// # Layout
///
/// ```text
/// ╭ Programme ─────────────────────────────╮
/// │Tatort                                  │
/// │Murot und das Murmeltier                │
/// │                                        │
/// │Das Erste  Fri 01.03.  20:15-21:45      │
/// │Crime · 1 h 30 min                      │
/// │On air, 45 min left                     │
/// │                                        │
/// │Description text, wrapped to the popup  │
/// │                                        │
/// │Esc to close                            │
/// ╰────────────────────────────────────────╯
/// ```
pub fn render_detail_panel(
    programme: &Programme,
    channel_name: &str,
    now: NaiveDateTime,
    area: Rect,
    buf: &mut Buffer,
) {
    let width = DETAIL_WIDTH.min(area.width);
    let lines = build_detail_lines(programme, channel_name, now, usize::from(width.saturating_sub(2)));
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(DETAIL_MAX_HEIGHT)
        .min(DETAIL_MAX_HEIGHT);
    let popup = centered_rect(width, height, area);

    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            " Programme ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    Paragraph::new(lines).block(block).render(popup, buf);
}

fn build_detail_lines(
    programme: &Programme,
    channel_name: &str,
    now: NaiveDateTime,
    width: usize,
) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from(Span::styled(
        programme.title.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];
    if let Some(episode) = &programme.episode {
        lines.push(Line::from(Span::styled(
            episode.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled(format!("{channel_name}  "), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{}  ", programme.start.format("%a %d.%m."))),
        Span::raw(time_range(programme)),
    ]));

    let duration = format_minutes(programme.duration_minutes());
    let facts = match &programme.genre {
        Some(genre) => format!("{genre} · {duration}"),
        None => duration,
    };
    lines.push(Line::from(Span::styled(facts, dim)));
    lines.push(Line::from(Span::styled(
        status_text(programme, now),
        timing_style(programme.timing(now)),
    )));

    if let Some(description) = programme.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(Line::default());
        lines.extend(wrap_text(description, width).into_iter().map(Line::from));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Esc to close", dim)));
    lines
}
