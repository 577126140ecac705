//! The programme schedule and the queries the guide runs against it.
//!
//! A [`Schedule`] is the guide's whole data set: the known channels and every
//! programme on them. The views query it in three ways:
//!
//! - the programme table takes every programme starting within a day's
//!   window ([`Schedule::programmes_starting_on`]);
//! - the running list takes every programme on air at a moment
//!   ([`Schedule::running_at`]);
//! - the channel listing takes one channel's programmes for a day
//!   ([`Schedule::programmes_for_channel`]).

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::channel::{Channel, ChannelId};
use crate::error::{ProtocolError, Result};
use crate::programme::Programme;

/// All channels and programmes known to the guide.
///
/// # Examples
///
/// ```
/// use tvgrid_protocol::{Channel, Schedule};
///
/// let mut schedule = Schedule::new();
/// schedule.add_channel(Channel::new(2, "ZDF").with_order(1));
/// schedule.add_channel(Channel::new(1, "Das Erste").with_order(0));
///
/// assert_eq!(schedule.channel_order(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Known channels.
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Known programmes, in no particular order.
    #[serde(default)]
    pub programmes: Vec<Programme>,
}

impl Schedule {
    /// Creates an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a channel.
    pub fn add_channel(&mut self, channel: Channel) {
        self.channels.push(channel);
    }

    /// Adds a programme.
    pub fn add_programme(&mut self, programme: Programme) {
        self.programmes.push(programme);
    }

    /// Parses a schedule from JSON, assigning ids to programmes without one.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the schedule does not
    /// validate.
    ///
    /// # Examples
    ///
    /// ```
    /// use tvgrid_protocol::Schedule;
    ///
    /// let schedule = Schedule::from_json(r#"{
    ///     "channels": [{ "id": 1, "name": "Das Erste" }],
    ///     "programmes": [{
    ///         "channel_id": 1,
    ///         "start": "2024-03-01T20:00:00",
    ///         "end": "2024-03-01T20:15:00",
    ///         "title": "Tagesschau"
    ///     }]
    /// }"#).unwrap();
    ///
    /// assert_eq!(schedule.programmes.len(), 1);
    /// assert!(!schedule.programmes[0].id.is_nil());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let mut schedule: Self =
            serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)?;
        for programme in &mut schedule.programmes {
            if programme.id == Uuid::nil() {
                programme.id = Programme::stable_id(programme.channel_id, programme.start);
            }
        }
        schedule.validate()?;
        Ok(schedule)
    }

    /// Serializes the schedule to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Loads a schedule from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ProtocolError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let schedule = Self::from_json(&content)?;
        debug!(
            channels = schedule.channels.len(),
            programmes = schedule.programmes.len(),
            "loaded schedule"
        );
        Ok(schedule)
    }

    /// Writes the schedule to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule cannot be serialized or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_json()?;
        std::fs::write(path, content).map_err(|e| ProtocolError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Checks every programme and that it airs on a known channel.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        for programme in &self.programmes {
            programme.validate()?;
            if self.channel(programme.channel_id).is_none() {
                return Err(ProtocolError::UnknownChannel {
                    title: programme.title.clone(),
                    channel: programme.channel_id,
                });
            }
        }

        let mut seen = BTreeSet::new();
        for channel in &self.channels {
            if !seen.insert(channel.id) {
                warn!(channel = channel.id, "channel listed more than once");
            }
        }
        Ok(())
    }

    /// Returns the channel with the given id.
    #[must_use]
    pub fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    /// Returns the channels in display order.
    ///
    /// A channel listed more than once appears once, at the position of
    /// its first entry in display order.
    #[must_use]
    pub fn ordered_channels(&self) -> Vec<&Channel> {
        let mut channels: Vec<&Channel> = self.channels.iter().collect();
        channels.sort_by_key(|c| (c.order, c.id));
        let mut seen = HashSet::new();
        channels.retain(|c| seen.insert(c.id));
        channels
    }

    /// Returns the channel ids in display order.
    #[must_use]
    pub fn channel_order(&self) -> Vec<ChannelId> {
        self.ordered_channels().iter().map(|c| c.id).collect()
    }

    /// Returns a channel's position in the display order.
    #[must_use]
    pub fn channel_rank(&self, id: ChannelId) -> Option<usize> {
        self.ordered_channels().iter().position(|c| c.id == id)
    }

    /// Returns the programmes starting within `hours` hours after midnight
    /// of `day`, sorted by start time, then channel order.
    ///
    /// The window may extend past midnight so the table can show the early
    /// hours of the next day.
    #[must_use]
    pub fn programmes_starting_on(&self, day: NaiveDate, hours: u32) -> Vec<&Programme> {
        let from = day.and_time(NaiveTime::MIN);
        let to = from + Duration::hours(i64::from(hours));
        let order = self.channel_order();
        let rank = |id: ChannelId| order.iter().position(|&c| c == id).unwrap_or(usize::MAX);

        let mut programmes: Vec<&Programme> = self
            .programmes
            .iter()
            .filter(|p| p.starts_within(from, to))
            .collect();
        programmes.sort_by_key(|p| (p.start, rank(p.channel_id)));
        programmes
    }

    /// Returns one channel's programmes starting on `day`, sorted by start.
    #[must_use]
    pub fn programmes_for_channel(&self, id: ChannelId, day: NaiveDate) -> Vec<&Programme> {
        let mut programmes: Vec<&Programme> = self
            .programmes
            .iter()
            .filter(|p| p.channel_id == id && p.start.date() == day)
            .collect();
        programmes.sort_by_key(|p| p.start);
        programmes
    }

    /// Returns the programmes on air at `time`, sorted by channel order,
    /// channel id, then start.
    #[must_use]
    pub fn running_at(&self, time: NaiveDateTime) -> Vec<&Programme> {
        let order = self.channel_order();
        let rank = |id: ChannelId| order.iter().position(|&c| c == id).unwrap_or(usize::MAX);

        let mut programmes: Vec<&Programme> = self
            .programmes
            .iter()
            .filter(|p| p.is_running_at(time))
            .collect();
        programmes.sort_by_key(|p| (rank(p.channel_id), p.channel_id, p.start));
        programmes
    }

    /// Returns the first programme on a channel starting at or after `time`.
    #[must_use]
    pub fn next_on_channel(&self, id: ChannelId, time: NaiveDateTime) -> Option<&Programme> {
        self.programmes
            .iter()
            .filter(|p| p.channel_id == id && p.start >= time)
            .min_by_key(|p| p.start)
    }

    /// Returns the distinct days programmes start on, in order.
    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        self.programmes
            .iter()
            .map(|p| p.start.date())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns the programme with the given id.
    #[must_use]
    pub fn programme(&self, id: Uuid) -> Option<&Programme> {
        self.programmes.iter().find(|p| p.id == id)
    }
}
