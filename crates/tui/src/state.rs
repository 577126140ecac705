//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! which view is shown, the displayed day, scroll offsets and selections.

use chrono::{NaiveDate, NaiveDateTime};
use tvgrid_layout::Rect as TableRect;
use tvgrid_protocol::{ChannelId, ProgrammeId, Schedule, TimeOfDay};

/// The main views of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The time-block programme table for one day.
    #[default]
    Table,
    /// Programmes on air at a point in time.
    Running,
    /// One channel's programmes for one day.
    Channel,
}

impl View {
    /// All views, in tab order.
    pub const ALL: [View; 3] = [View::Table, View::Running, View::Channel];

    /// Returns the view after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            View::Table => View::Running,
            View::Running => View::Channel,
            View::Channel => View::Table,
        }
    }

    /// Returns the view's display name.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            View::Table => "Programme Table",
            View::Running => "Running",
            View::Channel => "Channel",
        }
    }
}

/// The time the running view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunningTime {
    /// The current time.
    #[default]
    Now,
    /// A configured time preset on the displayed day.
    Preset(usize),
}

/// The visible part of the table, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Visible width, including the time gutter.
    pub width: u32,
    /// Visible height.
    pub height: u32,
    /// Width of the time gutter, which does not scroll horizontally.
    pub frozen: u32,
}

/// Scroll offset of the programme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableScroll {
    /// Horizontal offset of the channel columns.
    pub x: u32,
    /// Vertical offset.
    pub y: u32,
}

impl TableScroll {
    /// Scrolls the least amount needed to show a panel.
    ///
    /// If the panel is taller than the viewport its top edge wins; if the
    /// column is wider, its left edge wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use tvgrid_layout::Rect;
    /// use tvgrid_tui::state::{TableScroll, Viewport};
    ///
    /// let viewport = Viewport { width: 30, height: 10, frozen: 6 };
    /// let mut scroll = TableScroll::default();
    ///
    /// scroll.reveal(Rect::new(7, 12, 9, 4), 8, viewport);
    /// assert_eq!(scroll, TableScroll { x: 0, y: 6 });
    ///
    /// scroll.reveal(Rect::new(34, 2, 9, 4), 8, viewport);
    /// assert_eq!(scroll, TableScroll { x: 12, y: 2 });
    /// ```
    pub fn reveal(&mut self, rect: TableRect, column_width: u32, viewport: Viewport) {
        if rect.y < self.y {
            self.y = rect.y;
        } else if rect.bottom() > self.y + viewport.height {
            self.y = (rect.bottom() - viewport.height).min(rect.y);
        }

        let left = rect.x.saturating_sub(viewport.frozen);
        let right = rect.x + column_width;
        if left < self.x {
            self.x = left;
        } else if right > self.x + viewport.width {
            self.x = (right - viewport.width).min(left);
        }
    }

    /// Scrolls vertically by `delta`, keeping the table bottom in view.
    pub fn scroll_y(&mut self, delta: i64, table_height: u32, viewport_height: u32) {
        let max = i64::from(table_height.saturating_sub(viewport_height));
        self.y = (i64::from(self.y) + delta).clamp(0, max) as u32;
    }
}

/// The application state.
///
/// Contains all mutable state for the TUI application including the
/// schedule, the current view and selection tracking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The schedule being displayed.
    pub schedule: Schedule,
    /// Current view.
    pub view: View,
    /// Day shown by the table and channel views.
    pub day: NaiveDate,
    /// The current time, refreshed periodically.
    pub now: NaiveDateTime,
    /// Whether table panels grow to fill their row.
    pub grow_to_block: bool,
    /// Time shown by the running view.
    pub running_time: RunningTime,
    /// Table scroll offset.
    pub scroll: TableScroll,
    /// Selected panel in the table, as an index into its placements.
    pub table_selection: Option<usize>,
    /// Selected line in the running and channel views.
    pub list_selection: usize,
    /// Channel shown by the channel view, as a position in channel order.
    pub channel_index: usize,
    /// Programme whose details are open.
    pub detail: Option<ProgrammeId>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates a new state showing the table for the day of `now`.
    ///
    /// If the schedule has programmes but none on that day, the first day
    /// with programmes is shown instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tvgrid_protocol::dummy::dummy_schedule;
    /// use tvgrid_tui::state::{AppState, View};
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let now = day.and_hms_opt(20, 30, 0).unwrap();
    /// let state = AppState::new(dummy_schedule(day), now, true);
    ///
    /// assert_eq!(state.view, View::Table);
    /// assert_eq!(state.day, day);
    /// ```
    #[must_use]
    pub fn new(schedule: Schedule, now: NaiveDateTime, grow_to_block: bool) -> Self {
        let days = schedule.days();
        let day = if days.is_empty() || days.contains(&now.date()) {
            now.date()
        } else {
            days[0]
        };

        Self {
            schedule,
            view: View::default(),
            day,
            now,
            grow_to_block,
            running_time: RunningTime::default(),
            scroll: TableScroll::default(),
            table_selection: None,
            list_selection: 0,
            channel_index: 0,
            detail: None,
            help_visible: false,
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Switches to a view, resetting the list selection.
    pub fn show_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.list_selection = 0;
        }
    }

    /// Switches to the next view.
    pub fn next_view(&mut self) {
        self.show_view(self.view.next());
    }

    /// Moves to the next day that has programmes.
    ///
    /// Returns `false` if the schedule has nothing later.
    pub fn next_day(&mut self) -> bool {
        let next = self.schedule.days().into_iter().find(|&d| d > self.day);
        self.go_to_day(next)
    }

    /// Moves to the previous day that has programmes.
    ///
    /// Returns `false` if the schedule has nothing earlier.
    pub fn previous_day(&mut self) -> bool {
        let previous = self.schedule.days().into_iter().rev().find(|&d| d < self.day);
        self.go_to_day(previous)
    }

    fn go_to_day(&mut self, day: Option<NaiveDate>) -> bool {
        let Some(day) = day else {
            return false;
        };
        self.day = day;
        self.scroll = TableScroll::default();
        self.table_selection = None;
        self.list_selection = 0;
        true
    }

    /// Toggles whether table panels grow to fill their row.
    pub fn toggle_grow(&mut self) {
        self.grow_to_block = !self.grow_to_block;
    }

    /// Returns the time the running view shows.
    ///
    /// Presets are applied to today, whichever day the table shows. A
    /// preset that no longer exists falls back to the current time.
    #[must_use]
    pub fn running_instant(&self, presets: &[TimeOfDay]) -> NaiveDateTime {
        match self.running_time {
            RunningTime::Now => self.now,
            RunningTime::Preset(index) => presets
                .get(index)
                .map_or(self.now, |time| time.on(self.now.date())),
        }
    }

    /// Steps through "now" and the presets, wrapping around.
    pub fn cycle_running_time(&mut self, delta: i64, preset_count: usize) {
        let positions = preset_count as i64 + 1;
        let current = match self.running_time {
            RunningTime::Now => 0,
            RunningTime::Preset(index) => index as i64 + 1,
        };
        let next = (current + delta).rem_euclid(positions);
        self.running_time = match next {
            0 => RunningTime::Now,
            n => RunningTime::Preset(n as usize - 1),
        };
        self.list_selection = 0;
    }

    /// Returns the channel the channel view shows.
    #[must_use]
    pub fn channel_id(&self) -> Option<ChannelId> {
        self.schedule.channel_order().get(self.channel_index).copied()
    }

    /// Moves the channel view by `delta` channels, wrapping around.
    pub fn step_channel(&mut self, delta: i64) {
        let count = self.schedule.channel_order().len() as i64;
        if count == 0 {
            return;
        }
        self.channel_index = (self.channel_index as i64 + delta).rem_euclid(count) as usize;
        self.list_selection = 0;
    }

    /// Moves the list selection by `delta`, clamped to `len` lines.
    pub fn step_list(&mut self, delta: i64, len: usize) {
        let max = len.saturating_sub(1) as i64;
        self.list_selection = (self.list_selection as i64 + delta).clamp(0, max) as usize;
    }

    /// Opens the details of a programme.
    pub fn open_detail(&mut self, id: ProgrammeId) {
        self.detail = Some(id);
    }

    /// Closes the details panel.
    ///
    /// Returns `true` if it was open.
    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvgrid_protocol::dummy::dummy_schedule;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn state() -> AppState {
        AppState::new(dummy_schedule(day()), day().and_hms_opt(20, 30, 0).unwrap(), true)
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = state();

        assert_eq!(state.view, View::Table);
        assert_eq!(state.day, day());
        assert_eq!(state.running_time, RunningTime::Now);
        assert_eq!(state.table_selection, None);
        assert_eq!(state.detail, None);
        assert!(!state.help_visible);
    }

    #[test]
    fn new_state_falls_back_to_first_scheduled_day() {
        let later = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let state = AppState::new(
            dummy_schedule(day()),
            later.and_hms_opt(12, 0, 0).unwrap(),
            true,
        );
        assert_eq!(state.day, day());
    }

    #[test]
    fn next_view_cycles() {
        let mut state = state();
        for expected in [View::Running, View::Channel, View::Table] {
            state.next_view();
            assert_eq!(state.view, expected);
        }
    }

    #[test]
    fn day_navigation_stays_within_schedule() {
        let mut state = state();
        assert!(!state.previous_day());
        assert_eq!(state.day, day());

        state.table_selection = Some(3);
        state.scroll = TableScroll { x: 4, y: 20 };
        assert!(state.next_day());
        assert_eq!(state.day, day().succ_opt().unwrap());
        assert_eq!(state.table_selection, None);
        assert_eq!(state.scroll, TableScroll::default());

        // The dummy schedule's last day only holds spill-over programmes.
        assert!(state.next_day());
        assert!(!state.next_day());
        assert!(state.previous_day());
    }

    #[test]
    fn running_instant_applies_presets_to_today() {
        let mut state = state();
        let presets = [TimeOfDay::new(6, 0).unwrap(), TimeOfDay::new(20, 15).unwrap()];

        assert_eq!(state.running_instant(&presets), state.now);

        state.running_time = RunningTime::Preset(1);
        assert_eq!(
            state.running_instant(&presets),
            day().and_hms_opt(20, 15, 0).unwrap()
        );

        assert!(state.next_day());
        assert_eq!(
            state.running_instant(&presets),
            day().and_hms_opt(20, 15, 0).unwrap()
        );

        state.running_time = RunningTime::Preset(7);
        assert_eq!(state.running_instant(&presets), state.now);
    }

    #[test]
    fn cycle_running_time_wraps_through_now() {
        let mut state = state();
        state.cycle_running_time(1, 2);
        assert_eq!(state.running_time, RunningTime::Preset(0));
        state.cycle_running_time(1, 2);
        assert_eq!(state.running_time, RunningTime::Preset(1));
        state.cycle_running_time(1, 2);
        assert_eq!(state.running_time, RunningTime::Now);
        state.cycle_running_time(-1, 2);
        assert_eq!(state.running_time, RunningTime::Preset(1));
    }

    #[test]
    fn step_channel_wraps() {
        let mut state = state();
        assert_eq!(state.channel_id(), Some(1));
        state.step_channel(-1);
        assert_eq!(state.channel_id(), Some(4));
        state.step_channel(2);
        assert_eq!(state.channel_id(), Some(2));
    }

    #[test]
    fn step_list_clamps() {
        let mut state = state();
        state.step_list(-1, 5);
        assert_eq!(state.list_selection, 0);
        state.step_list(10, 5);
        assert_eq!(state.list_selection, 4);
        state.step_list(1, 0);
        assert_eq!(state.list_selection, 0);
    }

    #[test]
    fn help_toggle_and_dismiss() {
        let mut state = state();
        assert!(!state.dismiss_help());
        state.toggle_help();
        assert!(state.help_visible);
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }

    #[test]
    fn scroll_y_clamps_to_table() {
        let mut scroll = TableScroll::default();
        scroll.scroll_y(-5, 100, 20);
        assert_eq!(scroll.y, 0);
        scroll.scroll_y(500, 100, 20);
        assert_eq!(scroll.y, 80);
        scroll.scroll_y(10, 10, 20);
        assert_eq!(scroll.y, 0);
    }

    #[test]
    fn reveal_prefers_top_of_tall_panels() {
        let viewport = Viewport {
            width: 40,
            height: 5,
            frozen: 6,
        };
        let mut scroll = TableScroll::default();
        scroll.reveal(TableRect::new(7, 10, 9, 12), 8, viewport);
        assert_eq!(scroll.y, 10);
    }
}
