//! Programme table settings.
//!
//! Sizes are in terminal cells. The defaults show 28 hours (the day plus the
//! following early morning) in two-hour rows.

use serde::{Deserialize, Serialize};
use tvgrid_layout::{Metrics, TableOptions};

use crate::error::{ConfigError, Result};

/// Largest number of hours a table may cover.
pub const MAX_HOURS: u32 = 48;

/// Narrowest usable channel column.
pub const MIN_COLUMN_WIDTH: u32 = 4;

/// Settings for the time-block programme table.
///
/// # Examples
///
/// ```
/// use tvgrid_config::TableConfig;
///
/// let config = TableConfig::default();
/// assert_eq!(config.hours, 28);
/// assert_eq!(config.block_size, 2);
///
/// let options = config.options();
/// assert_eq!(options.row_count(), 14);
/// assert_eq!(options.metrics.column_width, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Width of a channel column.
    pub column_width: u32,
    /// Space between columns.
    pub gap: u32,
    /// Width of the time label gutter.
    pub row_header: u32,
    /// Hours per row.
    pub block_size: u32,
    /// Hours shown, starting at midnight.
    pub hours: u32,
    /// Whether programmes stretch to fill their row.
    pub grow_to_block: bool,
    /// Offset of the time label below the row's top edge.
    pub font_ascent: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            column_width: 16,
            gap: 1,
            row_header: 6,
            block_size: 2,
            hours: 28,
            grow_to_block: true,
            font_ascent: 0,
        }
    }
}

impl TableConfig {
    /// Checks that the settings describe a drawable table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTable`] if the hours are outside
    /// `1..=48`, the block size is outside `1..=hours`, or columns are
    /// narrower than four cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use tvgrid_config::TableConfig;
    ///
    /// let config = TableConfig { block_size: 30, ..Default::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HOURS).contains(&self.hours) {
            return Err(invalid(format!(
                "hours must be between 1 and {MAX_HOURS}, got {}",
                self.hours
            )));
        }
        if !(1..=self.hours).contains(&self.block_size) {
            return Err(invalid(format!(
                "block size must be between 1 and {}, got {}",
                self.hours, self.block_size
            )));
        }
        if self.column_width < MIN_COLUMN_WIDTH {
            return Err(invalid(format!(
                "column width must be at least {MIN_COLUMN_WIDTH}, got {}",
                self.column_width
            )));
        }
        Ok(())
    }

    /// Returns the layout options these settings describe.
    #[must_use]
    pub fn options(&self) -> TableOptions {
        TableOptions {
            hours: self.hours,
            block_size: self.block_size,
            grow_to_block: self.grow_to_block,
            metrics: Metrics {
                column_width: self.column_width,
                gap: self.gap,
                row_header: self.row_header,
                font_ascent: self.font_ascent,
            },
        }
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::InvalidTable { reason }
}
