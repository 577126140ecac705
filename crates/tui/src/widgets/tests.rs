//! Rendering tests that combine several widgets.

use chrono::{NaiveDate, NaiveDateTime};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use tvgrid_layout::TableOptions;
use tvgrid_protocol::dummy::dummy_schedule;

use super::{
    ProgrammeTable, render_channel_list, render_detail_panel, render_help_overlay,
    render_programme_table, render_status_bar,
};
use crate::state::{TableScroll, View};
use crate::test_utils::{buffer_lines, buffer_to_string};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn evening() -> NaiveDateTime {
    day().and_hms_opt(20, 30, 0).unwrap()
}

#[test]
fn table_header_lists_channels_in_order() {
    let schedule = dummy_schedule(day());
    let table = ProgrammeTable::build(&schedule, day(), TableOptions::default()).unwrap();
    let area = Rect::new(0, 0, 60, 12);
    let mut buf = Buffer::empty(area);

    render_programme_table(&table, TableScroll::default(), None, evening(), area, &mut buf);

    let header = &buffer_lines(&buf)[0];
    assert!(header.starts_with("      │Das Erste       │ZDF             │arte"));
}

#[test]
fn scrolled_table_keeps_time_gutter() {
    let schedule = dummy_schedule(day());
    let table = ProgrammeTable::build(&schedule, day(), TableOptions::default()).unwrap();
    let area = Rect::new(0, 0, 60, 120);
    let mut buf = Buffer::empty(area);
    let scroll = TableScroll { x: 34, y: 0 };

    render_programme_table(&table, scroll, None, evening(), area, &mut buf);

    let lines = buffer_lines(&buf);
    assert!(lines[0].starts_with("      │arte"));
    assert!(lines.iter().any(|l| l.starts_with(" 20:00")));
}

#[test]
fn running_panel_is_highlighted_in_the_table() {
    let schedule = dummy_schedule(day());
    let table = ProgrammeTable::build(&schedule, day(), TableOptions::default()).unwrap();
    let position = schedule
        .running_at(evening())
        .first()
        .and_then(|p| table.position_of(p.id))
        .unwrap();
    let rect = table.rect(position).unwrap();

    let area = Rect::new(0, 0, 80, 120);
    let mut buf = Buffer::empty(area);
    let scroll = TableScroll {
        x: 0,
        y: rect.y.saturating_sub(2),
    };
    render_programme_table(&table, scroll, None, evening(), area, &mut buf);

    // Body rows start below the channel header.
    let x = u16::try_from(rect.x).unwrap();
    let y = u16::try_from(rect.y - scroll.y).unwrap() + 1;
    assert_eq!(buf.cell((x, y)).unwrap().symbol(), "2");
    assert_eq!(buf.cell((x, y)).unwrap().fg, Color::Yellow);
}

#[test]
fn detail_popup_covers_channel_list() {
    let schedule = dummy_schedule(day());
    let channel = schedule.channel(1).unwrap();
    let programmes = schedule.programmes_for_channel(1, day());
    let tatort = programmes.iter().find(|p| p.title == "Tatort").unwrap();
    let area = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(area);

    render_channel_list(channel, day(), &programmes, evening(), 0, area, &mut buf);
    render_detail_panel(tatort, &channel.name, evening(), area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Das Erste · Fri 01.03.2024"));
    assert!(content.contains("On air, 75 min left"));
}

#[test]
fn help_overlay_draws_over_status_bar() {
    let area = Rect::new(0, 0, 80, 30);
    let mut buf = Buffer::empty(area);
    let status = Rect::new(0, 29, 80, 1);

    render_status_bar(View::Table, true, status, &mut buf);
    render_help_overlay(area, &mut buf);

    let lines = buffer_lines(&buf);
    assert!(lines[29].contains("Programme Table"));
    assert!(buffer_to_string(&buf).contains("Toggle help"));
}
