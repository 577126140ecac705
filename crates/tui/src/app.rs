//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use chrono::{Local, NaiveDate, NaiveDateTime};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::time::{Duration, Instant};
use tracing::{debug, warn};
use tvgrid_config::Config;
use tvgrid_layout::TableOptions;
use tvgrid_protocol::{Message, Programme, Schedule, TimeOfDay, truncate_to_minute};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_HEIGHT},
    state::{RunningTime, View, Viewport},
    terminal::AppTerminal,
    widgets::{
        ProgrammeTable, programme_table::Step, render_channel_list, render_detail_panel,
        render_help_overlay, render_programme_table, render_running_list, render_status_bar,
        running_list::running_programmes,
    },
};

/// Returns the current local time, truncated to the minute.
#[must_use]
pub fn current_minute() -> NaiveDateTime {
    truncate_to_minute(Local::now().naive_local())
}

/// Lays out the table for `day`, logging programmes it leaves out.
fn build_table(
    schedule: &Schedule,
    day: NaiveDate,
    options: TableOptions,
) -> Option<ProgrammeTable<'_>> {
    match ProgrammeTable::build(schedule, day, options) {
        Ok(table) => {
            let dropped = table.geometry().dropped;
            if !dropped.is_empty() {
                debug!(
                    %day,
                    total = dropped.total(),
                    unknown_channel = dropped.unknown_channel,
                    "programmes left out of the table"
                );
            }
            Some(table)
        }
        Err(err) => {
            warn!(%err, "cannot lay out the programme table");
            None
        }
    }
}

/// The main application struct.
///
/// Owns the application state and configuration and provides the main
/// event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    config: Config,
    /// Time presets, in ascending order.
    presets: Vec<TimeOfDay>,
    should_quit: bool,
    /// Last known terminal area, used to size the table viewport.
    last_area: Rect,
    /// Whether the header was shown in the last render.
    header_visible: bool,
}

impl App {
    /// Creates a new application showing `schedule` at time `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tvgrid_config::Config;
    /// use tvgrid_protocol::dummy::dummy_schedule;
    /// use tvgrid_tui::App;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let app = App::new(dummy_schedule(day), Config::default(), day.and_hms_opt(20, 30, 0).unwrap());
    /// assert_eq!(app.state().day, day);
    /// ```
    #[must_use]
    pub fn new(schedule: Schedule, config: Config, now: NaiveDateTime) -> Self {
        Self {
            state: AppState::new(schedule, now, config.table.grow_to_block),
            presets: config.guide.sorted_time_buttons(),
            config,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the application should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the current time used for colouring and the running view.
    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.state.now = now;
    }

    /// Updates the application state based on a message.
    ///
    /// `Refresh` always applies. When the help overlay is visible, most
    /// other messages dismiss it instead of their normal action. While the
    /// detail popup is open, navigation is ignored and `Escape`, `Back` or
    /// `Select` close it.
    pub fn update(&mut self, msg: Message) {
        if msg == Message::Refresh {
            self.set_now(current_minute());
            return;
        }

        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        if self.state.detail.is_some() {
            match msg {
                Message::Quit => self.should_quit = true,
                Message::ToggleHelp => self.state.toggle_help(),
                Message::Escape | Message::Back | Message::Select => {
                    self.state.close_detail();
                }
                _ => {}
            }
            return;
        }

        match msg {
            Message::Quit => self.should_quit = true,
            Message::ToggleHelp => self.state.toggle_help(),
            Message::Escape => {
                if self.state.view == View::Table {
                    self.state.table_selection = None;
                }
            }
            Message::Back => self.state.show_view(View::Table),
            Message::NextView => self.state.next_view(),
            Message::ShowTable => self.state.show_view(View::Table),
            Message::ShowRunning => self.state.show_view(View::Running),
            Message::ShowChannel => self.state.show_view(View::Channel),
            Message::NextDay => {
                if !self.state.next_day() {
                    debug!(day = %self.state.day, "no later day in the schedule");
                }
            }
            Message::PreviousDay => {
                if !self.state.previous_day() {
                    debug!(day = %self.state.day, "no earlier day in the schedule");
                }
            }
            Message::ToggleGrow => {
                self.state.toggle_grow();
                self.reveal_selection();
            }
            Message::RunningAt { preset } => {
                if preset < self.presets.len() {
                    self.state.running_time = RunningTime::Preset(preset);
                    self.state.list_selection = 0;
                    self.state.show_view(View::Running);
                } else {
                    debug!(preset, "no time preset with this number");
                }
            }
            Message::RunningNow => {
                self.state.running_time = RunningTime::Now;
                self.state.list_selection = 0;
                self.state.show_view(View::Running);
            }
            Message::Select => self.open_selected(),
            Message::NavigateLeft => self.navigate(Step::Left),
            Message::NavigateRight => self.navigate(Step::Right),
            Message::NavigateUp => self.navigate(Step::Up),
            Message::NavigateDown => self.navigate(Step::Down),
            Message::PageUp => self.page(-1),
            Message::PageDown => self.page(1),
            Message::Refresh => {}
        }
    }

    /// Returns the table options for the current settings.
    fn table_options(&self) -> TableOptions {
        TableOptions {
            grow_to_block: self.state.grow_to_block,
            ..self.config.table.options()
        }
    }

    /// Lays out the table for the shown day.
    fn table(&self) -> Option<ProgrammeTable<'_>> {
        build_table(&self.state.schedule, self.state.day, self.table_options())
    }

    /// Returns the area below the header and above the status bar.
    fn content_area(&self) -> Rect {
        let top = if self.header_visible { HEADER_HEIGHT } else { 0 };
        Rect {
            y: self.last_area.y + top,
            height: self
                .last_area
                .height
                .saturating_sub(top)
                .saturating_sub(STATUS_HEIGHT),
            ..self.last_area
        }
    }

    /// Returns the visible part of the table body.
    fn table_viewport(&self) -> Viewport {
        let area = self.content_area();
        Viewport {
            width: u32::from(area.width),
            // One row holds the channel names.
            height: u32::from(area.height.saturating_sub(1)),
            frozen: self.config.table.row_header,
        }
    }

    /// Returns the time the running view shows.
    fn running_instant(&self) -> NaiveDateTime {
        self.state.running_instant(&self.presets)
    }

    /// Moves the selection of the current view.
    fn navigate(&mut self, step: Step) {
        match self.state.view {
            View::Table => {
                let viewport = self.table_viewport();
                let options = self.table_options();
                let Some(table) = build_table(&self.state.schedule, self.state.day, options) else {
                    return;
                };
                if let Some(position) = table.step(self.state.table_selection, step) {
                    table.reveal(position, &mut self.state.scroll, viewport);
                    self.state.table_selection = Some(position);
                }
            }
            View::Running => match step {
                Step::Left => self.state.cycle_running_time(-1, self.presets.len()),
                Step::Right => self.state.cycle_running_time(1, self.presets.len()),
                Step::Up | Step::Down => {
                    let len = running_programmes(&self.state.schedule, self.running_instant()).len();
                    self.state.step_list(if step == Step::Up { -1 } else { 1 }, len);
                }
            },
            View::Channel => match step {
                Step::Left => self.state.step_channel(-1),
                Step::Right => self.state.step_channel(1),
                Step::Up | Step::Down => {
                    let len = self.channel_programmes().len();
                    self.state.step_list(if step == Step::Up { -1 } else { 1 }, len);
                }
            },
        }
    }

    /// Scrolls the current view by a page.
    fn page(&mut self, direction: i64) {
        let viewport = self.table_viewport();
        let page = i64::from(viewport.height.max(1));
        match self.state.view {
            View::Table => {
                let Some(height) = self.table().map(|t| t.height()) else {
                    return;
                };
                self.state
                    .scroll
                    .scroll_y(direction * page, height, viewport.height);
            }
            View::Running => {
                let len = running_programmes(&self.state.schedule, self.running_instant()).len();
                self.state.step_list(direction * page, len);
            }
            View::Channel => {
                let len = self.channel_programmes().len();
                self.state.step_list(direction * page, len);
            }
        }
    }

    /// Keeps the table selection visible after the layout changed.
    fn reveal_selection(&mut self) {
        let viewport = self.table_viewport();
        let Some(position) = self.state.table_selection else {
            return;
        };
        let options = self.table_options();
        if let Some(table) = build_table(&self.state.schedule, self.state.day, options) {
            table.reveal(position, &mut self.state.scroll, viewport);
        }
    }

    /// Returns the programmes of the channel view.
    fn channel_programmes(&self) -> Vec<&Programme> {
        self.state
            .channel_id()
            .map(|id| self.state.schedule.programmes_for_channel(id, self.state.day))
            .unwrap_or_default()
    }

    /// Returns the selected programme of the current view.
    #[must_use]
    pub fn selected_programme(&self) -> Option<&Programme> {
        match self.state.view {
            View::Table => {
                let position = self.state.table_selection?;
                self.table()?.programme(position)
            }
            View::Running => running_programmes(&self.state.schedule, self.running_instant())
                .get(self.state.list_selection)
                .copied(),
            View::Channel => self
                .channel_programmes()
                .get(self.state.list_selection)
                .copied(),
        }
    }

    /// Opens the detail popup for the selected programme.
    fn open_selected(&mut self) {
        if let Some(id) = self.selected_programme().map(|p| p.id) {
            self.state.open_detail(id);
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.render_terminal_too_small(frame, area);
            return;
        }

        self.header_visible = area.height >= MIN_HEIGHT_WITH_HEADER;
        if self.header_visible {
            let header = Rect {
                height: HEADER_HEIGHT,
                ..area
            };
            self.render_header(frame, header);
        }

        let content = self.content_area();
        let status = Rect {
            y: content.bottom(),
            height: STATUS_HEIGHT,
            ..area
        };

        match self.state.view {
            View::Table => self.render_table(frame, content),
            View::Running => self.render_running(frame, content),
            View::Channel => self.render_channel(frame, content),
        }
        render_status_bar(
            self.state.view,
            self.state.grow_to_block,
            status,
            frame.buffer_mut(),
        );

        if let Some(programme) = self
            .state
            .detail
            .and_then(|id| self.state.schedule.programme(id))
        {
            let channel = self
                .state
                .schedule
                .channel(programme.channel_id)
                .map_or("", |c| c.name.as_str());
            render_detail_panel(programme, channel, self.state.now, area, frame.buffer_mut());
        }

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            y: area.y + vertical_offset,
            height: area.height.saturating_sub(vertical_offset),
            ..area
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// Polls for events, updates state and renders until the user quits.
    /// The clock is refreshed every `guide.refresh_secs` seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tvgrid_config::Config;
    /// use tvgrid_protocol::dummy::dummy_schedule;
    /// use tvgrid_tui::{App, app::current_minute, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let now = current_minute();
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(dummy_schedule(now.date()), Config::default(), now);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let refresh_every = Duration::from_secs(u64::from(self.config.guide.refresh_secs));
        let mut last_refresh = Instant::now();

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg);
            }

            if last_refresh.elapsed() >= refresh_every {
                self.update(Message::Refresh);
                last_refresh = Instant::now();
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title, day and clock.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, clock_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "tvgrid",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(self.state.view.title(), Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let clock = Paragraph::new(Line::from(vec![
            Span::styled(
                self.state.day.format("%a %d.%m.%Y").to_string(),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {}", self.state.now.format("%H:%M")),
                Style::default().fg(Color::Yellow),
            ),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(clock, clock_area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        match self.table() {
            Some(table) => render_programme_table(
                &table,
                self.state.scroll,
                self.state.table_selection,
                self.state.now,
                area,
                frame.buffer_mut(),
            ),
            None => frame.render_widget(
                Paragraph::new("The table settings are invalid")
                    .style(Style::default().fg(Color::Red)),
                area,
            ),
        }
    }

    fn render_running(&self, frame: &mut Frame, area: Rect) {
        let at = self.running_instant();
        let label = match self.state.running_time {
            RunningTime::Now => format!("now ({})", at.format("%H:%M")),
            RunningTime::Preset(_) => format!("at {}", at.format("%H:%M")),
        };
        render_running_list(
            &self.state.schedule,
            at,
            &label,
            self.state.now,
            self.state.list_selection,
            area,
            frame.buffer_mut(),
        );
    }

    fn render_channel(&self, frame: &mut Frame, area: Rect) {
        let Some(channel) = self
            .state
            .channel_id()
            .and_then(|id| self.state.schedule.channel(id))
        else {
            frame.render_widget(
                Paragraph::new("No channels in the schedule")
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        };
        let programmes = self.channel_programmes();
        render_channel_list(
            channel,
            self.state.day,
            &programmes,
            self.state.now,
            self.state.list_selection,
            area,
            frame.buffer_mut(),
        );
    }
}
