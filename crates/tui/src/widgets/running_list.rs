//! Programmes on air at a point in time.
//!
//! One line per channel with a running programme, followed by what comes
//! next on that channel.

use chrono::NaiveDateTime;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tvgrid_protocol::{Programme, Schedule};

use crate::widgets::programme_table::truncate;
use crate::widgets::{render_selectable, time_range, timing_style};

/// Width of the channel name column.
const NAME_WIDTH: usize = 12;

/// Returns the programmes the running list shows at `at`.
#[must_use]
pub fn running_programmes(schedule: &Schedule, at: NaiveDateTime) -> Vec<&Programme> {
    schedule.running_at(at)
}

/// Renders the programmes running at `at`.
///
/// # Arguments
///
/// * `schedule` - The schedule to list from
/// * `at` - The point in time to list
/// * `label` - How `at` is named in the title, e.g. `"now"` or `"20:15"`
/// * `now` - The current time, for past/running/upcoming colouring
/// * `selected` - Index of the selected line
/// * `area` - The area to render in
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tvgrid_protocol::dummy::dummy_schedule;
/// use tvgrid_tui::widgets::render_running_list;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let schedule = dummy_schedule(day);
/// let at = day.and_hms_opt(20, 20, 0).unwrap();
///
/// let area = Rect::new(0, 0, 80, 10);
/// let mut buf = Buffer::empty(area);
/// render_running_list(&schedule, at, "20:20", at, 0, area, &mut buf);
/// ```
pub fn render_running_list(
    schedule: &Schedule,
    at: NaiveDateTime,
    label: &str,
    now: NaiveDateTime,
    selected: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .title(format!(" Running {label} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let programmes = running_programmes(schedule, at);
    if programmes.is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(format!("Nothing on air {label}"))
            .style(Style::default().fg(Color::DarkGray))
            .render(inner, buf);
        return;
    }

    let lines = programmes
        .iter()
        .map(|programme| running_line(schedule, programme, now))
        .collect();
    render_selectable(block, lines, Some(selected), area, buf);
}

/// Builds the line for one running programme.
fn running_line<'a>(schedule: &'a Schedule, programme: &'a Programme, now: NaiveDateTime) -> Line<'a> {
    let style = timing_style(programme.timing(now));
    let channel = schedule
        .channel(programme.channel_id)
        .map_or("?", |c| c.name.as_str());

    let mut spans = vec![
        Span::styled(
            format!("{:<NAME_WIDTH$} ", truncate(channel, NAME_WIDTH)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", time_range(programme)), style),
        Span::styled(programme.title.as_str(), style.add_modifier(Modifier::BOLD)),
    ];
    if let Some(episode) = &programme.episode {
        spans.push(Span::styled(
            format!(" ({episode})"),
            style.add_modifier(Modifier::ITALIC),
        ));
    }
    if let Some(next) = schedule.next_on_channel(programme.channel_id, programme.end) {
        spans.push(Span::styled(
            format!("  then {} {}", next.start.format("%H:%M"), next.title),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
