//! Programmes and their timing.
//!
//! A [`Programme`] is one scheduled broadcast on one channel. Start and end
//! are local wall-clock times without a time zone, as delivered by the
//! guide's data source.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::channel::ChannelId;
use crate::error::{ProtocolError, Result};
use crate::time::hours_since;

/// Unique identifier for a programme.
pub type ProgrammeId = Uuid;

/// Namespace for programme ids derived from channel and start time.
const PROGRAMME_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_9b7d_4c1a_8e35_0d2b_7a9f_c410);

/// Where a programme lies relative to a point in time.
///
/// # Examples
///
/// ```
/// use tvgrid_protocol::Timing;
///
/// assert!(Timing::Running.is_running());
/// assert!(!Timing::Past.is_running());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    /// The programme has ended.
    Past,
    /// The programme is on air.
    Running,
    /// The programme has not started yet.
    Upcoming,
}

impl Timing {
    /// Returns `true` for programmes on air.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// A scheduled broadcast.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tvgrid_protocol::{Programme, Timing};
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let start = day.and_hms_opt(20, 15, 0).unwrap();
/// let end = day.and_hms_opt(21, 45, 0).unwrap();
///
/// let programme = Programme::new(1, start, end, "Tatort")
///     .with_episode("Murot und das Murmeltier")
///     .with_genre("Crime");
///
/// assert_eq!(programme.duration_minutes(), 90);
/// assert_eq!(programme.start_hour(day), 20);
/// assert_eq!(programme.timing(day.and_hms_opt(21, 0, 0).unwrap()), Timing::Running);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Programme {
    /// Unique identifier; derived from channel and start when not supplied.
    #[serde(default = "Uuid::nil")]
    pub id: ProgrammeId,
    /// Channel the programme airs on.
    pub channel_id: ChannelId,
    /// Start time.
    pub start: NaiveDateTime,
    /// End time.
    pub end: NaiveDateTime,
    /// Title.
    pub title: String,
    /// Episode title, for series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<String>,
    /// Genre.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Programme {
    /// Creates a programme with an id derived from its channel and start.
    #[must_use]
    pub fn new(
        channel_id: ChannelId,
        start: NaiveDateTime,
        end: NaiveDateTime,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: Self::stable_id(channel_id, start),
            channel_id,
            start,
            end,
            title: title.into(),
            episode: None,
            genre: None,
            description: None,
        }
    }

    /// Returns the id a programme on `channel_id` starting at `start` gets.
    ///
    /// The same channel and start always produce the same id, so reloading a
    /// schedule keeps ids stable.
    #[must_use]
    pub fn stable_id(channel_id: ChannelId, start: NaiveDateTime) -> ProgrammeId {
        let name = format!("{channel_id}/{}", start.format("%Y-%m-%dT%H:%M"));
        Uuid::new_v5(&PROGRAMME_NAMESPACE, name.as_bytes())
    }

    /// Sets the episode title.
    #[must_use]
    pub fn with_episode(mut self, episode: impl Into<String>) -> Self {
        self.episode = Some(episode.into());
        self
    }

    /// Sets the genre.
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the start hour relative to midnight of `day`.
    #[must_use]
    pub fn start_hour(&self, day: NaiveDate) -> i32 {
        hours_since(day, self.start)
    }

    /// Returns the end hour relative to midnight of `day`.
    #[must_use]
    pub fn end_hour(&self, day: NaiveDate) -> i32 {
        hours_since(day, self.end)
    }

    /// Returns the running time in whole minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns `true` if the programme is on air at `time`.
    ///
    /// A programme ending exactly at `time` is no longer running.
    #[must_use]
    pub fn is_running_at(&self, time: NaiveDateTime) -> bool {
        self.start <= time && self.end > time
    }

    /// Returns whether the programme is past, running or upcoming at `time`.
    #[must_use]
    pub fn timing(&self, time: NaiveDateTime) -> Timing {
        if self.end <= time {
            Timing::Past
        } else if self.start <= time {
            Timing::Running
        } else {
            Timing::Upcoming
        }
    }

    /// Returns `true` if the programme starts within `[from, to)`.
    #[must_use]
    pub fn starts_within(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        self.start >= from && self.start < to
    }

    /// Checks that the programme has a title and a positive running time.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidProgramme`] describing the problem.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ProtocolError::InvalidProgramme {
                title: self.title.clone(),
                reason: "title cannot be empty".to_string(),
            });
        }
        if self.end <= self.start {
            return Err(ProtocolError::InvalidProgramme {
                title: self.title.clone(),
                reason: format!("ends at {} before it starts at {}", self.end, self.start),
            });
        }
        Ok(())
    }
}
