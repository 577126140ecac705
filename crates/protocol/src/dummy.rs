//! Dummy data generation for testing and demonstration.
//!
//! This module provides a sample schedule with realistic programmes so the
//! guide can be tried without a data file.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tvgrid_protocol::dummy::dummy_schedule;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let schedule = dummy_schedule(day);
//! assert_eq!(schedule.channels.len(), 4);
//! assert!(schedule.validate().is_ok());
//! ```

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::channel::Channel;
use crate::programme::Programme;
use crate::schedule::Schedule;

/// One programme slot: start time, duration in minutes, title, episode, genre.
type Slot = (&'static str, i64, &'static str, Option<&'static str>, &'static str);

const ERSTE: &[Slot] = &[
    ("05:30", 270, "Morgenmagazin", None, "News"),
    ("10:00", 50, "Tagesschau", None, "News"),
    ("10:50", 130, "Live nach Neun", None, "Magazine"),
    ("13:00", 60, "Mittagsmagazin", None, "News"),
    ("14:00", 170, "Sturm der Liebe", Some("Folge 4012"), "Series"),
    ("16:50", 130, "Brisant", None, "Magazine"),
    ("19:00", 60, "Wer weiß denn sowas?", None, "Quiz"),
    ("20:00", 15, "Tagesschau", None, "News"),
    ("20:15", 90, "Tatort", Some("Murot und das Murmeltier"), "Crime"),
    ("21:45", 75, "Tagesthemen", None, "News"),
    ("23:00", 120, "Late Night Movie", None, "Movie"),
    ("25:00", 90, "Nachtmagazin", None, "News"),
];

const ZDF: &[Slot] = &[
    ("05:30", 270, "Morgenmagazin", None, "News"),
    ("12:00", 10, "heute", None, "News"),
    ("12:10", 170, "drehscheibe", None, "Magazine"),
    ("15:00", 120, "Bares für Rares", None, "Show"),
    ("17:00", 120, "hallo deutschland", None, "Magazine"),
    ("19:00", 20, "heute", None, "News"),
    ("19:20", 5, "Wetter", None, "News"),
    ("19:25", 50, "Die Rosenheim-Cops", Some("Mord im Fitnessstudio"), "Series"),
    ("20:15", 105, "Der Kriminalist", Some("Tote Liebe"), "Crime"),
    ("22:00", 30, "heute journal", None, "News"),
    ("22:30", 210, "Markus Lanz", None, "Talk"),
];

const ARTE: &[Slot] = &[
    ("06:00", 360, "Reisedokumentationen", None, "Documentary"),
    ("12:00", 45, "Stadt Land Kunst", None, "Culture"),
    ("12:45", 375, "Spielfilm am Nachmittag", None, "Movie"),
    ("19:00", 40, "Xenius", Some("Bienen"), "Science"),
    ("19:40", 35, "ARTE Journal", None, "News"),
    ("20:15", 135, "Themenabend", Some("Der große Fluss"), "Documentary"),
    ("22:30", 300, "Nachtprogramm", None, "Documentary"),
];

const KIKA: &[Slot] = &[
    ("06:00", 30, "Sesamstraße", None, "Kids"),
    ("06:30", 120, "Zeichentrick am Morgen", None, "Kids"),
    ("08:30", 210, "Schulfernsehen", None, "Education"),
    ("12:00", 480, "Kinderprogramm", None, "Kids"),
    ("20:00", 10, "Baumhaus", None, "Kids"),
];

/// Generates a sample schedule for `day` and the day after.
///
/// Creates four channels with a full evening each. Start times past
/// `24:00` spill into the next morning, as real guides do.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tvgrid_protocol::dummy::dummy_schedule;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let schedule = dummy_schedule(day);
///
/// assert_eq!(schedule.days().len(), 3);
/// assert!(!schedule.programmes_starting_on(day, 28).is_empty());
/// ```
#[must_use]
pub fn dummy_schedule(day: NaiveDate) -> Schedule {
    let mut schedule = Schedule::new();
    let lineup: [(u32, &str, &[Slot]); 4] = [
        (1, "Das Erste", ERSTE),
        (2, "ZDF", ZDF),
        (3, "arte", ARTE),
        (4, "KiKA", KIKA),
    ];

    for (order, (id, name, slots)) in lineup.into_iter().enumerate() {
        schedule.add_channel(Channel::new(id, name).with_order(order as u32));
        for offset in 0..2 {
            let base = day + Duration::days(offset);
            for &(start, minutes, title, episode, genre) in slots {
                let start = slot_start(base, start);
                let end = start + Duration::minutes(minutes);
                let mut programme = Programme::new(id, start, end, title).with_genre(genre);
                if let Some(episode) = episode {
                    programme = programme.with_episode(episode);
                }
                schedule.add_programme(programme);
            }
        }
    }

    schedule
}

/// Resolves an `HH:MM` slot start that may exceed `24:00`.
fn slot_start(day: NaiveDate, value: &str) -> NaiveDateTime {
    let (hour, minute) = value.split_once(':').unwrap_or((value, "0"));
    let hours: i64 = hour.parse().unwrap_or(0);
    let minutes: i64 = minute.parse().unwrap_or(0);
    day.and_time(NaiveTime::MIN) + Duration::hours(hours) + Duration::minutes(minutes)
}
