//! The time-block programme table.
//!
//! Programmes are laid out by [`tvgrid_layout`] in terminal cells: a column
//! per channel, a row per block of hours. The table background (row shading,
//! time labels, column separators) is painted through [`TerminalPainter`];
//! programme panels are drawn on top at their placements.

use chrono::{NaiveDate, NaiveDateTime};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};
use tvgrid_layout::{
    ChannelColumns, Painter, Placement, Rect as TableRect, TableBlock, TableGeometry,
    TableOptions, TimeBlockTable,
};
use tvgrid_protocol::{ChannelId, Programme, ProgrammeId, Schedule};

use crate::state::{TableScroll, Viewport};
use crate::widgets::timing_style;

/// Cells kept free at the right edge of a panel's text.
pub const PANEL_PADDING: u32 = 1;

/// Background of every other row.
const SHADE: Color = Color::Indexed(236);

/// What a panel line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Start time.
    Time,
    /// Part of the wrapped title.
    Title,
    /// Episode title.
    Episode,
    /// Genre.
    Genre,
}

/// One line of a programme panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLine {
    /// What the line shows.
    pub kind: LineKind,
    /// The text, already fitted to the panel width.
    pub text: String,
}

/// Wraps `text` at word boundaries into lines of at most `width` characters.
///
/// Words longer than a line are split.
///
/// # Examples
///
/// ```
/// use tvgrid_tui::widgets::programme_table::wrap_text;
///
/// assert_eq!(wrap_text("Der große Fluss", 10), ["Der große", "Fluss"]);
/// assert_eq!(wrap_text("Nachtmagazin", 5), ["Nacht", "magaz", "in"]);
/// assert!(wrap_text("", 10).is_empty());
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        if chars.is_empty() {
            continue;
        }

        if line_len > 0 && line_len + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line_len += chars.len();
        line.extend(chars);
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Shortens `text` to `width` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    if width > 0 {
        cut.push('…');
    }
    cut
}

/// Returns the lines a programme panel shows at a column width.
///
/// A panel has a start time line, the title wrapped to the column, and one
/// line each for the episode and genre when present.
#[must_use]
pub fn panel_lines(programme: &Programme, column_width: u32) -> Vec<PanelLine> {
    let width = column_width.saturating_sub(PANEL_PADDING).max(1) as usize;
    let line = |kind, text| PanelLine { kind, text };

    let mut lines = vec![line(LineKind::Time, programme.start.format("%H:%M").to_string())];
    lines.extend(
        wrap_text(&programme.title, width)
            .into_iter()
            .map(|text| line(LineKind::Title, text)),
    );
    if let Some(episode) = &programme.episode {
        lines.push(line(LineKind::Episode, truncate(episode, width)));
    }
    if let Some(genre) = &programme.genre {
        lines.push(line(LineKind::Genre, truncate(genre, width)));
    }
    lines
}

/// A programme as a block of the table.
#[derive(Debug, Clone, Copy)]
pub struct ProgrammePanel<'a> {
    programme: &'a Programme,
}

impl<'a> ProgrammePanel<'a> {
    /// Wraps a programme.
    #[must_use]
    pub fn new(programme: &'a Programme) -> Self {
        Self { programme }
    }

    /// Returns the programme.
    #[must_use]
    pub fn programme(&self) -> &'a Programme {
        self.programme
    }
}

impl TableBlock for ProgrammePanel<'_> {
    type ChannelId = ChannelId;

    fn channel_id(&self) -> ChannelId {
        self.programme.channel_id
    }

    fn start_hour(&self, day: NaiveDate) -> i32 {
        self.programme.start_hour(day)
    }

    fn end_hour(&self, day: NaiveDate) -> i32 {
        self.programme.end_hour(day)
    }

    fn measure_height(&self, width: u32) -> u32 {
        panel_lines(self.programme, width).len() as u32
    }
}

/// Direction of a selection step in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Previous panel in the column.
    Up,
    /// Next panel in the column.
    Down,
    /// Nearest panel in the nearest column to the left.
    Left,
    /// Nearest panel in the nearest column to the right.
    Right,
}

/// A laid-out programme table for one day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tvgrid_layout::TableOptions;
/// use tvgrid_protocol::dummy::dummy_schedule;
/// use tvgrid_tui::widgets::programme_table::ProgrammeTable;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let schedule = dummy_schedule(day);
/// let table = ProgrammeTable::build(&schedule, day, TableOptions::default()).unwrap();
///
/// assert_eq!(table.channel_names(), ["Das Erste", "ZDF", "arte", "KiKA"]);
/// assert!(table.height() > 0);
/// ```
#[derive(Debug)]
pub struct ProgrammeTable<'a> {
    table: TimeBlockTable<ChannelId>,
    panels: Vec<ProgrammePanel<'a>>,
    geometry: TableGeometry,
    placements: Vec<Placement>,
    channel_names: Vec<&'a str>,
}

impl<'a> ProgrammeTable<'a> {
    /// Lays out the programmes starting on `day`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` describe an empty table.
    pub fn build(
        schedule: &'a Schedule,
        day: NaiveDate,
        options: TableOptions,
    ) -> tvgrid_layout::Result<Self> {
        let channels = schedule.ordered_channels();
        let columns = ChannelColumns::new(channels.iter().map(|&c| c.id));
        let table = TimeBlockTable::new(day, columns, options)?;

        let panels: Vec<ProgrammePanel<'a>> = schedule
            .programmes_starting_on(day, options.hours)
            .into_iter()
            .map(ProgrammePanel::new)
            .collect();
        let geometry = table.compute_geometry(&panels);
        let placements = table.place(&geometry, &panels);

        Ok(Self {
            table,
            panels,
            geometry,
            placements,
            channel_names: channels.iter().map(|&c| c.name.as_str()).collect(),
        })
    }

    /// Returns the underlying layout table.
    #[must_use]
    pub fn table(&self) -> &TimeBlockTable<ChannelId> {
        &self.table
    }

    /// Returns the computed geometry.
    #[must_use]
    pub fn geometry(&self) -> &TableGeometry {
        &self.geometry
    }

    /// Returns the placed panels, in schedule order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the channel names, one per column.
    #[must_use]
    pub fn channel_names(&self) -> &[&'a str] {
        &self.channel_names
    }

    /// Returns the total width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    /// Returns the total height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    /// Returns the programme of the placement at `position`.
    #[must_use]
    pub fn programme(&self, position: usize) -> Option<&'a Programme> {
        let placement = self.placements.get(position)?;
        self.panels.get(placement.index).map(ProgrammePanel::programme)
    }

    /// Returns the rectangle of the placement at `position`.
    #[must_use]
    pub fn rect(&self, position: usize) -> Option<TableRect> {
        self.placements.get(position).map(|p| p.rect)
    }

    /// Returns the placement position of a programme.
    #[must_use]
    pub fn position_of(&self, id: ProgrammeId) -> Option<usize> {
        (0..self.placements.len()).find(|&pos| self.programme(pos).is_some_and(|p| p.id == id))
    }

    /// Returns the column of the placement at `position`.
    #[must_use]
    pub fn column(&self, position: usize) -> Option<usize> {
        let placement = self.placements.get(position)?;
        self.geometry
            .blocks
            .get(placement.index)
            .copied()
            .flatten()
            .map(|b| b.column)
    }

    /// Returns the placement a selection step from `from` lands on.
    ///
    /// Without a current selection the first placement is chosen. A step
    /// with nowhere to go keeps the current selection.
    #[must_use]
    pub fn step(&self, from: Option<usize>, step: Step) -> Option<usize> {
        let Some(from) = from.filter(|&pos| pos < self.placements.len()) else {
            return (!self.placements.is_empty()).then_some(0);
        };
        let current = self.placements[from].rect;
        let column = self.column(from)?;
        let in_column = |target: usize| {
            self.placements
                .iter()
                .enumerate()
                .filter(move |&(pos, _)| self.column(pos) == Some(target))
                .map(|(pos, p)| (pos, p.rect))
        };

        let found = match step {
            Step::Up => in_column(column)
                .filter(|(_, r)| r.y < current.y)
                .max_by_key(|(_, r)| r.y),
            Step::Down => in_column(column)
                .filter(|(_, r)| r.y > current.y)
                .min_by_key(|(_, r)| r.y),
            Step::Left | Step::Right => self
                .neighbour_column(column, step)
                .and_then(|target| {
                    in_column(target).min_by_key(|(_, r)| vertical_distance(*r, current.y))
                }),
        };
        Some(found.map_or(from, |(pos, _)| pos))
    }

    /// Scrolls so the placement at `position` is visible.
    pub fn reveal(&self, position: usize, scroll: &mut TableScroll, viewport: Viewport) {
        if let Some(rect) = self.rect(position) {
            let column_width = self.table.options().metrics.column_width;
            scroll.reveal(rect, column_width, viewport);
        }
    }

    /// Returns the nearest column in the step's direction that holds panels.
    fn neighbour_column(&self, column: usize, step: Step) -> Option<usize> {
        let occupied =
            |c: usize| (0..self.placements.len()).any(|pos| self.column(pos) == Some(c));
        match step {
            Step::Left => (0..column).rev().find(|&c| occupied(c)),
            Step::Right => (column + 1..self.geometry.columns).find(|&c| occupied(c)),
            Step::Up | Step::Down => None,
        }
    }

    /// Paints the channel name row.
    pub fn paint_header(&self, scroll_x: u32, area: Rect, buf: &mut Buffer) {
        let metrics = self.table.options().metrics;
        let mut painter = TerminalPainter::new(buf, area, scroll_x, 0, metrics.row_header);
        let name_style = Style::default().add_modifier(Modifier::BOLD);

        for (column, name) in self.channel_names.iter().enumerate() {
            let separator = i64::from(self.table.separator_x(column));
            painter.put_str(separator, 0, "│", separator_style());
            let x = i64::from(self.table.column_x(column));
            painter.put_str(x, 0, &truncate(name, metrics.column_width as usize), name_style);
        }
    }

    /// Paints the table and its panels.
    pub fn paint_body(
        &self,
        scroll: TableScroll,
        selected: Option<usize>,
        now: NaiveDateTime,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let metrics = self.table.options().metrics;
        let mut painter = TerminalPainter::new(buf, area, scroll.x, scroll.y, metrics.row_header);
        self.table
            .paint(&self.geometry, &mut painter, self.geometry.width, self.geometry.height);

        for (position, placement) in self.placements.iter().enumerate() {
            let programme = self.panels[placement.index].programme();
            draw_panel(
                &mut painter,
                programme,
                placement.rect,
                metrics.column_width,
                now,
                selected == Some(position),
            );
        }
    }
}

/// Distance from `y` to the nearest row of `rect`.
fn vertical_distance(rect: TableRect, y: u32) -> u32 {
    if y < rect.y {
        rect.y - y
    } else if y >= rect.bottom() {
        y + 1 - rect.bottom()
    } else {
        0
    }
}

fn separator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Draws one programme panel inside its placement.
fn draw_panel(
    painter: &mut TerminalPainter<'_>,
    programme: &Programme,
    rect: TableRect,
    column_width: u32,
    now: NaiveDateTime,
    selected: bool,
) {
    let mut base = timing_style(programme.timing(now));
    if selected {
        base = base.add_modifier(Modifier::REVERSED);
        painter.fill(rect.x, rect.y, column_width, rect.height, base);
    }

    let lines = panel_lines(programme, column_width);
    for (offset, line) in lines.iter().take(rect.height as usize).enumerate() {
        let style = match line.kind {
            LineKind::Time => base.add_modifier(Modifier::BOLD),
            LineKind::Title => base,
            LineKind::Episode => base.add_modifier(Modifier::ITALIC),
            LineKind::Genre => base.add_modifier(Modifier::DIM),
        };
        painter.put_str(
            i64::from(rect.x),
            i64::from(rect.y) + offset as i64,
            &line.text,
            style,
        );
    }
}

/// A [`Painter`] drawing into a ratatui [`Buffer`].
///
/// Table coordinates are shifted by the scroll offset and clipped to the
/// target area. The leftmost `frozen` cells hold the time labels and do not
/// scroll horizontally.
#[derive(Debug)]
pub struct TerminalPainter<'b> {
    buf: &'b mut Buffer,
    area: Rect,
    scroll_x: u32,
    scroll_y: u32,
    frozen: u32,
}

impl<'b> TerminalPainter<'b> {
    /// Creates a painter for `area` of `buf`.
    #[must_use]
    pub fn new(buf: &'b mut Buffer, area: Rect, scroll_x: u32, scroll_y: u32, frozen: u32) -> Self {
        Self {
            buf,
            area,
            scroll_x,
            scroll_y,
            frozen,
        }
    }

    /// Maps a table position to a buffer position, if it is visible.
    fn to_screen(&self, x: i64, y: i64) -> Option<(u16, u16)> {
        let frozen = i64::from(self.frozen);
        let column = if x < frozen {
            x
        } else {
            let column = x - i64::from(self.scroll_x);
            if column < frozen {
                return None;
            }
            column
        };
        let row = y - i64::from(self.scroll_y);

        let inside = (0..i64::from(self.area.width)).contains(&column)
            && (0..i64::from(self.area.height)).contains(&row);
        inside.then(|| (self.area.x + column as u16, self.area.y + row as u16))
    }

    /// Writes `text` starting at a table position.
    pub fn put_str(&mut self, x: i64, y: i64, text: &str, style: Style) {
        for (offset, ch) in text.chars().enumerate() {
            if let Some(position) = self.to_screen(x + offset as i64, y)
                && let Some(cell) = self.buf.cell_mut(position)
            {
                cell.set_char(ch).set_style(style);
            }
        }
    }

    /// Applies `style` to a rectangle in table coordinates.
    pub fn fill(&mut self, x: u32, y: u32, width: u32, height: u32, style: Style) {
        let top = y.max(self.scroll_y);
        let bottom = (y + height).min(self.scroll_y + u32::from(self.area.height));
        for row in top..bottom {
            for column in x..x + width {
                if let Some(position) = self.to_screen(i64::from(column), i64::from(row))
                    && let Some(cell) = self.buf.cell_mut(position)
                {
                    cell.set_style(style);
                }
            }
        }
    }
}

impl Painter for TerminalPainter<'_> {
    fn shade_band(&mut self, y: u32, height: u32, width: u32) {
        self.fill(0, y, width, height, Style::default().bg(SHADE));
    }

    fn vertical_line(&mut self, x: u32, height: u32) {
        let top = self.scroll_y;
        let bottom = height.min(self.scroll_y + u32::from(self.area.height));
        for y in top..bottom {
            self.put_str(i64::from(x), i64::from(y), "│", separator_style());
        }
    }

    fn measure_text(&self, text: &str) -> u32 {
        text.chars().count() as u32
    }

    fn text(&mut self, x: i64, baseline: u32, text: &str) {
        self.put_str(x, i64::from(baseline), text, Style::default().fg(Color::Cyan));
    }
}

/// Renders the programme table with its channel header row.
///
/// # Arguments
///
/// * `table` - The laid-out table
/// * `scroll` - Scroll offset of the table body
/// * `selected` - Placement position of the selected panel
/// * `now` - The current time, for past/running/upcoming colouring
/// * `area` - The area to render in
/// * `buf` - The buffer to render into
pub fn render_programme_table(
    table: &ProgrammeTable<'_>,
    scroll: TableScroll,
    selected: Option<usize>,
    now: NaiveDateTime,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height == 0 {
        return;
    }
    if table.channel_names().is_empty() {
        Paragraph::new("No channels in the schedule")
            .style(Style::default().fg(Color::DarkGray))
            .render(area, buf);
        return;
    }

    let header = Rect { height: 1, ..area };
    let body = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };
    table.paint_header(scroll.x, header, buf);
    table.paint_body(scroll, selected, now, body, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_lines;
    use proptest::prelude::*;
    use tvgrid_layout::Metrics;
    use tvgrid_protocol::Channel;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        day().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn options(column_width: u32, block_size: u32, hours: u32) -> TableOptions {
        TableOptions {
            hours,
            block_size,
            grow_to_block: true,
            metrics: Metrics {
                column_width,
                gap: 1,
                row_header: 6,
                font_ascent: 0,
            },
        }
    }

    /// One channel, one short programme in each of two six-hour rows.
    fn small_schedule() -> Schedule {
        let mut schedule = Schedule::new();
        schedule.add_channel(Channel::new(1, "ARD"));
        schedule.add_programme(Programme::new(1, at(1, 0), at(2, 0), "News"));
        schedule.add_programme(Programme::new(1, at(7, 0), at(9, 0), "Film"));
        schedule
    }

    fn two_channel_schedule() -> Schedule {
        let mut schedule = Schedule::new();
        schedule.add_channel(Channel::new(1, "ARD").with_order(0));
        schedule.add_channel(Channel::new(2, "ZDF").with_order(1));
        schedule.add_programme(Programme::new(1, at(1, 0), at(2, 0), "A1"));
        schedule.add_programme(Programme::new(1, at(2, 0), at(3, 0), "A2"));
        schedule.add_programme(Programme::new(1, at(8, 0), at(9, 0), "A3"));
        schedule.add_programme(Programme::new(2, at(7, 0), at(9, 0), "Z1"));
        schedule
    }

    #[test]
    fn panel_lines_include_optional_fields() {
        let programme = Programme::new(1, at(20, 15), at(21, 45), "Tatort")
            .with_episode("Murot und das Murmeltier")
            .with_genre("Crime");
        let lines = panel_lines(&programme, 12);

        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["20:15", "Tatort", "Murot und …", "Crime"]);
        assert_eq!(lines[2].kind, LineKind::Episode);
    }

    #[test]
    fn panel_height_follows_title_wrapping() {
        let programme = Programme::new(1, at(20, 15), at(21, 45), "Der große Fluss");
        let panel = ProgrammePanel::new(&programme);
        assert_eq!(panel.measure_height(20), 2);
        assert_eq!(panel.measure_height(10), 3);
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Crime", 5), "Crime");
        assert_eq!(truncate("Documentary", 6), "Docum…");
        assert_eq!(truncate("Documentary", 0), "");
    }

    #[test]
    fn build_uses_channel_order() {
        let schedule = two_channel_schedule();
        let table = ProgrammeTable::build(&schedule, day(), options(8, 6, 12)).unwrap();

        assert_eq!(table.channel_names(), ["ARD", "ZDF"]);
        assert_eq!(table.placements().len(), 4);
        assert!(table.geometry().dropped.is_empty());
    }

    #[test]
    fn build_rejects_zero_block_size() {
        let schedule = small_schedule();
        assert!(ProgrammeTable::build(&schedule, day(), options(8, 0, 12)).is_err());
    }

    #[test]
    fn step_moves_within_and_across_columns() {
        let schedule = two_channel_schedule();
        let table = ProgrammeTable::build(&schedule, day(), options(8, 6, 12)).unwrap();
        let title = |pos: Option<usize>| table.programme(pos.unwrap()).unwrap().title.as_str();

        let first = table.step(None, Step::Down);
        assert_eq!(title(first), "A1");

        let second = table.step(first, Step::Down);
        assert_eq!(title(second), "A2");

        let third = table.step(second, Step::Down);
        assert_eq!(title(third), "A3");
        assert_eq!(table.step(third, Step::Down), third);

        let right = table.step(third, Step::Right);
        assert_eq!(title(right), "Z1");
        assert_eq!(table.step(right, Step::Right), right);

        let back = table.step(right, Step::Left);
        assert_eq!(title(back), "A3");

        assert_eq!(title(table.step(second, Step::Up)), "A1");
    }

    #[test]
    fn position_of_finds_programmes() {
        let schedule = two_channel_schedule();
        let table = ProgrammeTable::build(&schedule, day(), options(8, 6, 12)).unwrap();
        let id = schedule.programmes[3].id;
        let position = table.position_of(id).unwrap();
        assert_eq!(table.programme(position).unwrap().title, "Z1");
    }

    #[test]
    fn render_small_table() {
        let schedule = small_schedule();
        let table = ProgrammeTable::build(&schedule, day(), options(8, 6, 12)).unwrap();
        let area = Rect::new(0, 0, 16, 5);
        let mut buf = Buffer::empty(area);

        render_programme_table(&table, TableScroll::default(), None, at(12, 0), area, &mut buf);

        insta::assert_debug_snapshot!(buffer_lines(&buf), @r#"
        [
            "      │ARD",
            " 00:00│01:00",
            "      │News",
            " 06:00│07:00",
            "      │Film",
        ]
        "#);
    }

    #[test]
    fn render_clips_to_scroll_offset() {
        let schedule = small_schedule();
        let table = ProgrammeTable::build(&schedule, day(), options(8, 6, 12)).unwrap();
        let area = Rect::new(0, 0, 16, 3);
        let mut buf = Buffer::empty(area);

        let scroll = TableScroll { x: 0, y: 2 };
        render_programme_table(&table, scroll, None, at(12, 0), area, &mut buf);

        insta::assert_debug_snapshot!(buffer_lines(&buf), @r#"
        [
            "      │ARD",
            " 06:00│07:00",
            "      │Film",
        ]
        "#);
    }

    #[test]
    fn horizontal_scroll_keeps_time_gutter() {
        let schedule = two_channel_schedule();
        let table = ProgrammeTable::build(&schedule, day(), options(8, 6, 12)).unwrap();
        let area = Rect::new(0, 0, 16, 2);
        let mut buf = Buffer::empty(area);

        let scroll = TableScroll { x: 9, y: 0 };
        render_programme_table(&table, scroll, None, at(12, 0), area, &mut buf);

        insta::assert_debug_snapshot!(buffer_lines(&buf), @r#"
        [
            "      │ZDF",
            " 00:00│",
        ]
        "#);
    }

    #[test]
    fn selected_panel_is_reversed() {
        let schedule = small_schedule();
        let table = ProgrammeTable::build(&schedule, day(), options(8, 6, 12)).unwrap();
        let area = Rect::new(0, 0, 16, 5);
        let mut buf = Buffer::empty(area);

        render_programme_table(&table, TableScroll::default(), Some(1), at(12, 0), area, &mut buf);

        let selected = buf.cell((7, 3)).unwrap();
        assert!(selected.modifier.contains(Modifier::REVERSED));
        let other = buf.cell((7, 1)).unwrap();
        assert!(!other.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn odd_rows_are_shaded() {
        let schedule = small_schedule();
        let table = ProgrammeTable::build(&schedule, day(), options(8, 6, 12)).unwrap();
        let area = Rect::new(0, 0, 16, 5);
        let mut buf = Buffer::empty(area);

        render_programme_table(&table, TableScroll::default(), None, at(12, 0), area, &mut buf);

        assert_eq!(buf.cell((0, 3)).unwrap().bg, SHADE);
        assert_ne!(buf.cell((0, 1)).unwrap().bg, SHADE);
    }

    #[test]
    fn render_without_channels_shows_hint() {
        let schedule = Schedule::new();
        let table = ProgrammeTable::build(&schedule, day(), options(8, 6, 12)).unwrap();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        render_programme_table(&table, TableScroll::default(), None, at(12, 0), area, &mut buf);

        assert_eq!(buffer_lines(&buf)[0], "No channels in the schedule");
    }

    proptest! {
        #[test]
        fn wrapped_lines_fit_and_keep_words(
            words in prop::collection::vec("[a-zäöü]{1,8}", 0..12),
            width in 8usize..30,
        ) {
            let text = words.join(" ");
            let lines = wrap_text(&text, width);

            for line in &lines {
                prop_assert!(line.chars().count() <= width);
            }
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            prop_assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
