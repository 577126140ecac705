//! Guide behaviour settings: time presets and the refresh interval.

use serde::{Deserialize, Serialize};
use tvgrid_protocol::TimeOfDay;

use crate::error::{ConfigError, Result};

/// Minimum allowed refresh interval (10 seconds).
pub const MIN_REFRESH_SECS: u32 = 10;

/// Maximum allowed refresh interval (1 hour).
pub const MAX_REFRESH_SECS: u32 = 3600;

/// Default refresh interval (1 minute).
pub const DEFAULT_REFRESH_SECS: u32 = 60;

/// The time presets offered when no others are configured.
pub const DEFAULT_TIME_BUTTONS: [(u8, u8); 5] = [(6, 0), (12, 0), (16, 0), (20, 15), (23, 0)];

/// Settings for the running-programme view and clock refresh.
///
/// # Examples
///
/// ```
/// use tvgrid_config::GuideConfig;
///
/// let config = GuideConfig::default();
/// let labels: Vec<String> = config.time_buttons.iter().map(ToString::to_string).collect();
/// assert_eq!(labels, ["06:00", "12:00", "16:00", "20:15", "23:00"]);
/// assert_eq!(config.refresh_secs, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Times of day offered as presets for "what runs at".
    pub time_buttons: Vec<TimeOfDay>,
    /// How often the clock-dependent views refresh, in seconds.
    pub refresh_secs: u32,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            time_buttons: DEFAULT_TIME_BUTTONS
                .iter()
                .filter_map(|&(hour, minute)| TimeOfDay::new(hour, minute))
                .collect(),
            refresh_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl GuideConfig {
    /// Checks the refresh interval and preset list.
    ///
    /// Time strings are already checked while parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGuide`] if the refresh interval is
    /// outside `10..=3600` seconds or a preset is listed twice.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_REFRESH_SECS..=MAX_REFRESH_SECS).contains(&self.refresh_secs) {
            return Err(ConfigError::InvalidGuide {
                reason: format!(
                    "refresh interval must be between {MIN_REFRESH_SECS} and {MAX_REFRESH_SECS} seconds, got {}",
                    self.refresh_secs
                ),
            });
        }
        for (i, time) in self.time_buttons.iter().enumerate() {
            if self.time_buttons[..i].contains(time) {
                return Err(ConfigError::InvalidGuide {
                    reason: format!("time preset {time} is listed twice"),
                });
            }
        }
        Ok(())
    }

    /// Returns the presets in chronological order.
    #[must_use]
    pub fn sorted_time_buttons(&self) -> Vec<TimeOfDay> {
        let mut times = self.time_buttons.clone();
        times.sort();
        times
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GuideConfig::default();
        assert_eq!(config.time_buttons.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_refresh_out_of_range() {
        for refresh_secs in [5, 7200] {
            let config = GuideConfig {
                refresh_secs,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn rejects_duplicate_presets() {
        let time = TimeOfDay::new(20, 15).unwrap();
        let config = GuideConfig {
            time_buttons: vec![time, time],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("20:15"));
    }

    #[test]
    fn parses_presets_from_strings() {
        let config: GuideConfig =
            serde_json::from_str(r#"{"time_buttons": ["22:00", "7:30"]}"#).unwrap();
        assert_eq!(config.time_buttons[1], TimeOfDay::new(7, 30).unwrap());
        assert_eq!(config.refresh_secs, DEFAULT_REFRESH_SECS);
        assert_eq!(config.sorted_time_buttons()[0].hour(), 7);
    }

    #[test]
    fn rejects_unparseable_presets() {
        let result = serde_json::from_str::<GuideConfig>(r#"{"time_buttons": ["25:00"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_preset_list_is_allowed() {
        let config = GuideConfig {
            time_buttons: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
