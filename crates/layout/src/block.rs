//! Programme blocks as seen by the layout engine.
//!
//! The engine never looks at titles or timestamps directly. Anything that can
//! tell its channel, its start and end hour relative to a day, and its natural
//! height at a given width can be laid out.

use chrono::NaiveDate;

/// A programme block that can be placed into a [`TimeBlockTable`].
///
/// Hours are counted from midnight of the displayed `day` and are allowed to
/// leave the `0..24` range: a programme that started the evening before yields
/// a negative start hour, one that runs past midnight an hour above 24.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tvgrid_layout::TableBlock;
///
/// struct News;
///
/// impl TableBlock for News {
///     type ChannelId = u32;
///
///     fn channel_id(&self) -> u32 {
///         7
///     }
///     fn start_hour(&self, _day: NaiveDate) -> i32 {
///         20
///     }
///     fn end_hour(&self, _day: NaiveDate) -> i32 {
///         21
///     }
///     fn measure_height(&self, width: u32) -> u32 {
///         // One line per 10 units of width needed for "Evening News".
///         12u32.div_ceil(width.max(1) / 10 + 1)
///     }
/// }
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(News.start_hour(day), 20);
/// assert!(News.is_visible());
/// ```
///
/// [`TimeBlockTable`]: crate::TimeBlockTable
pub trait TableBlock {
    /// The identifier used to look up the block's column.
    type ChannelId;

    /// Returns the channel this block belongs to.
    fn channel_id(&self) -> Self::ChannelId;

    /// Returns the hour the block starts at, relative to midnight of `day`.
    fn start_hour(&self, day: NaiveDate) -> i32;

    /// Returns the hour the block ends at, relative to midnight of `day`.
    fn end_hour(&self, day: NaiveDate) -> i32;

    /// Returns the natural height of the block's content at `width`.
    fn measure_height(&self, width: u32) -> u32;

    /// Returns whether the block should be placed.
    ///
    /// Hidden blocks still take part in row sizing; they only receive no
    /// placement.
    fn is_visible(&self) -> bool {
        true
    }
}

impl<T: TableBlock + ?Sized> TableBlock for &T {
    type ChannelId = T::ChannelId;

    fn channel_id(&self) -> Self::ChannelId {
        (**self).channel_id()
    }

    fn start_hour(&self, day: NaiveDate) -> i32 {
        (**self).start_hour(day)
    }

    fn end_hour(&self, day: NaiveDate) -> i32 {
        (**self).end_hour(day)
    }

    fn measure_height(&self, width: u32) -> u32 {
        (**self).measure_height(width)
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}

/// A block with precomputed hours and a fixed natural height.
///
/// Handy for hosts that measure their content up front, and for tests. The
/// displayed day is ignored since the hours are already relative to it.
///
/// # Examples
///
/// ```
/// use tvgrid_layout::FixedBlock;
///
/// let block = FixedBlock::new("ard", 8, 10, 40).hidden();
/// assert_eq!(block.height, 40);
/// assert!(!block.visible);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBlock<Id> {
    /// Channel the block belongs to.
    pub channel: Id,
    /// Start hour relative to the displayed day.
    pub start_hour: i32,
    /// End hour relative to the displayed day.
    pub end_hour: i32,
    /// Natural height, independent of width.
    pub height: u32,
    /// Whether the block is placed.
    pub visible: bool,
}

impl<Id> FixedBlock<Id> {
    /// Creates a visible block.
    #[must_use]
    pub fn new(channel: Id, start_hour: i32, end_hour: i32, height: u32) -> Self {
        Self {
            channel,
            start_hour,
            end_hour,
            height,
            visible: true,
        }
    }

    /// Marks the block as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl<Id: Clone> TableBlock for FixedBlock<Id> {
    type ChannelId = Id;

    fn channel_id(&self) -> Id {
        self.channel.clone()
    }

    fn start_hour(&self, _day: NaiveDate) -> i32 {
        self.start_hour
    }

    fn end_hour(&self, _day: NaiveDate) -> i32 {
        self.end_hour
    }

    fn measure_height(&self, _width: u32) -> u32 {
        self.height
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
