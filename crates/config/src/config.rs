//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tvgrid application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::guide::GuideConfig;
use crate::persistence::{locate_config, read_config, read_config_async, write_config};
use crate::table::TableConfig;

/// The main configuration struct for the tvgrid application.
///
/// # Examples
///
/// ```
/// use tvgrid_config::{Config, TableConfig};
///
/// let config = Config::default();
/// assert!(config.schedule_path.is_none());
///
/// let config = Config {
///     table: TableConfig { block_size: 3, ..Default::default() },
///     schedule_path: Some("guide.json".into()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Programme table layout.
    #[serde(default)]
    pub table: TableConfig,

    /// Time presets and refresh behaviour.
    #[serde(default)]
    pub guide: GuideConfig,

    /// Schedule file to show.
    ///
    /// When unset the application shows built-in sample data. A relative
    /// path is resolved against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./tvgrid.json5` or `./tvgrid.json`
    /// 2. User: `~/.config/tvgrid/config.json5` or `~/.config/tvgrid/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tvgrid_config::Config;
    ///
    /// # async fn example() -> tvgrid_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Rows of {} hours", config.table.block_size);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub async fn load() -> Result<Self> {
        match locate_config() {
            Some(source) => {
                let config: Config = read_config_async(source.path()).await?;
                config.validate()?;
                info!(%source, "loaded configuration");
                Ok(config.resolve_paths(source.path()))
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tvgrid_config::Config;
    ///
    /// # fn example() -> tvgrid_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Config = read_config(path)?;
        config.validate()?;
        Ok(config.resolve_paths(path))
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config(path, self)
    }

    /// Validates the table and guide settings.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tvgrid_config::{Config, GuideConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.guide = GuideConfig { refresh_secs: 1, ..Default::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.table.validate()?;
        self.guide.validate()?;
        Ok(())
    }

    /// Makes a relative schedule path relative to the config file's directory.
    fn resolve_paths(mut self, config_file: &Path) -> Self {
        if let Some(schedule) = self.schedule_path.as_ref().filter(|p| p.is_relative())
            && let Some(dir) = config_file.parent().filter(|d| !d.as_os_str().is_empty())
        {
            self.schedule_path = Some(dir.join(schedule));
        }
        self
    }
}
