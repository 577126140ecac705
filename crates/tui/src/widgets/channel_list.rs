//! One channel's programmes for a day.

use chrono::{NaiveDate, NaiveDateTime};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tvgrid_protocol::{Channel, Programme};

use crate::widgets::{render_selectable, time_range, timing_style};

/// Renders a channel's programmes for `day`.
///
/// `programmes` are listed in the given order; the caller usually passes
/// [`Schedule::programmes_for_channel`](tvgrid_protocol::Schedule::programmes_for_channel).
pub fn render_channel_list(
    channel: &Channel,
    day: NaiveDate,
    programmes: &[&Programme],
    now: NaiveDateTime,
    selected: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .title(format!(" {} · {} ", channel.name, day.format("%a %d.%m.%Y")))
        .title_bottom(Line::from(" ←/→ channel ").style(Style::default().fg(Color::DarkGray)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if programmes.is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new("No programmes on this day")
            .style(Style::default().fg(Color::DarkGray))
            .render(inner, buf);
        return;
    }

    let lines = programmes
        .iter()
        .map(|programme| channel_line(programme, now))
        .collect();
    render_selectable(block, lines, Some(selected), area, buf);
}

fn channel_line(programme: &Programme, now: NaiveDateTime) -> Line<'_> {
    let style = timing_style(programme.timing(now));
    let mut spans = vec![
        Span::styled(format!("{}  ", time_range(programme)), style),
        Span::styled(programme.title.as_str(), style.add_modifier(Modifier::BOLD)),
    ];
    if let Some(episode) = &programme.episode {
        spans.push(Span::styled(
            format!(" ({episode})"),
            style.add_modifier(Modifier::ITALIC),
        ));
    }
    if let Some(genre) = &programme.genre {
        spans.push(Span::styled(
            format!("  [{genre}]"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_lines;
    use tvgrid_protocol::dummy::dummy_schedule;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn lists_channel_programmes_in_order() {
        let schedule = dummy_schedule(day());
        let channel = schedule.channel(4).unwrap();
        let programmes = schedule.programmes_for_channel(4, day());
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);

        render_channel_list(
            channel,
            day(),
            &programmes,
            day().and_hms_opt(12, 0, 0).unwrap(),
            0,
            area,
            &mut buf,
        );

        insta::assert_debug_snapshot!(buffer_lines(&buf), @r#"
        [
            "╭ KiKA · Fri 01.03.2024 ───────────────────────────────────╮",
            "│06:00-06:30  Sesamstraße  [Kids]                          │",
            "│06:30-08:30  Zeichentrick am Morgen  [Kids]               │",
            "│08:30-12:00  Schulfernsehen  [Education]                  │",
            "│12:00-20:00  Kinderprogramm  [Kids]                       │",
            "│20:00-20:10  Baumhaus  [Kids]                             │",
            "│                                                          │",
            "╰ ←/→ channel ─────────────────────────────────────────────╯",
        ]
        "#);
    }

    #[test]
    fn running_programme_is_highlighted() {
        let schedule = dummy_schedule(day());
        let channel = schedule.channel(4).unwrap();
        let programmes = schedule.programmes_for_channel(4, day());
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);

        render_channel_list(
            channel,
            day(),
            &programmes,
            day().and_hms_opt(12, 30, 0).unwrap(),
            0,
            area,
            &mut buf,
        );

        assert_eq!(buf.cell((1, 4)).unwrap().fg, Color::Yellow);
        assert_eq!(buf.cell((1, 1)).unwrap().fg, Color::DarkGray);
        assert_eq!(buf.cell((1, 5)).unwrap().fg, Color::White);
    }

    #[test]
    fn empty_day_says_so() {
        let schedule = dummy_schedule(day());
        let channel = schedule.channel(4).unwrap();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        render_channel_list(
            channel,
            day(),
            &[],
            day().and_hms_opt(12, 0, 0).unwrap(),
            0,
            area,
            &mut buf,
        );

        assert!(buffer_lines(&buf)[1].contains("No programmes on this day"));
    }
}
