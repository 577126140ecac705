//! Results of a layout pass.

/// An axis-aligned rectangle in table units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the bottom edge (exclusive).
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the right edge (exclusive).
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns `true` if the point lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Why a block was left out of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// The block starts one or more time blocks before the displayed day.
    BeforeDay,
    /// The block starts after the last row of the table.
    AfterDay,
    /// The block's channel has no column.
    UnknownChannel,
}

/// Counts of blocks left out of a layout pass, by reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropReport {
    /// Blocks starting before the displayed day.
    pub before_day: usize,
    /// Blocks starting after the last row.
    pub after_day: usize,
    /// Blocks on channels without a column.
    pub unknown_channel: usize,
}

impl DropReport {
    /// Records one dropped block.
    pub fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::BeforeDay => self.before_day += 1,
            DropReason::AfterDay => self.after_day += 1,
            DropReason::UnknownChannel => self.unknown_channel += 1,
        }
    }

    /// Returns the number of dropped blocks.
    #[must_use]
    pub fn total(&self) -> usize {
        self.before_day + self.after_day + self.unknown_channel
    }

    /// Returns `true` if no block was dropped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Where a single block ended up, and how tall it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGeometry {
    /// Row (time block) the block starts in.
    pub row: usize,
    /// Row the block ends in; may lie past the last row.
    pub end_row: i64,
    /// Column of the block's channel.
    pub column: usize,
    /// Height measured at the column width.
    pub natural_height: u32,
    /// Final height, including growth.
    pub height: u32,
}

/// The full geometry of a table for one set of blocks.
///
/// `blocks` is index-aligned with the slice passed to
/// [`TimeBlockTable::compute_geometry`]; dropped blocks are `None`.
///
/// [`TimeBlockTable::compute_geometry`]: crate::TimeBlockTable::compute_geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGeometry {
    /// Height of every row.
    pub row_heights: Vec<u32>,
    /// Running sum of row heights; entry `i` is the bottom of row `i`.
    pub cumulative_heights: Vec<u32>,
    /// Per-block geometry, `None` for dropped blocks.
    pub blocks: Vec<Option<BlockGeometry>>,
    /// Number of columns.
    pub columns: usize,
    /// Total table width.
    pub width: u32,
    /// Total table height.
    pub height: u32,
    /// Blocks that were left out.
    pub dropped: DropReport,
}

impl TableGeometry {
    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// Returns the top edge of a row.
    ///
    /// Rows past the end start at the table bottom.
    #[must_use]
    pub fn row_top(&self, row: usize) -> u32 {
        match row {
            0 => 0,
            _ => self
                .cumulative_heights
                .get(row - 1)
                .copied()
                .unwrap_or(self.height),
        }
    }

    /// Returns the final height of the block at `index`, if it was laid out.
    #[must_use]
    pub fn block_height(&self, index: usize) -> Option<u32> {
        self.blocks.get(index).copied().flatten().map(|b| b.height)
    }

    /// Returns the natural heights of all blocks in a cell, summed.
    #[must_use]
    pub fn cell_natural_height(&self, row: usize, column: usize) -> u32 {
        self.cell_blocks(row, column).map(|b| b.natural_height).sum()
    }

    /// Returns the final heights of all blocks in a cell, summed.
    #[must_use]
    pub fn cell_height(&self, row: usize, column: usize) -> u32 {
        self.cell_blocks(row, column).map(|b| b.height).sum()
    }

    /// Returns the number of blocks in a cell.
    #[must_use]
    pub fn cell_count(&self, row: usize, column: usize) -> usize {
        self.cell_blocks(row, column).count()
    }

    /// Returns the row at a vertical position, if it lies inside the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use tvgrid_layout::{DropReport, TableGeometry};
    ///
    /// let geometry = TableGeometry {
    ///     row_heights: vec![10, 0, 5],
    ///     cumulative_heights: vec![10, 10, 15],
    ///     blocks: vec![],
    ///     columns: 1,
    ///     width: 20,
    ///     height: 15,
    ///     dropped: DropReport::default(),
    /// };
    /// assert_eq!(geometry.row_at(0), Some(0));
    /// assert_eq!(geometry.row_at(10), Some(2));
    /// assert_eq!(geometry.row_at(15), None);
    /// ```
    #[must_use]
    pub fn row_at(&self, y: u32) -> Option<usize> {
        self.cumulative_heights.iter().position(|&bottom| y < bottom)
    }

    fn cell_blocks(&self, row: usize, column: usize) -> impl Iterator<Item = &BlockGeometry> {
        self.blocks
            .iter()
            .flatten()
            .filter(move |b| b.row == row && b.column == column)
    }
}

/// The rectangle assigned to a visible block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the block in the slice that was laid out.
    pub index: usize,
    /// The block's rectangle.
    pub rect: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_report_counts_by_reason() {
        let mut report = DropReport::default();
        assert!(report.is_empty());

        report.record(DropReason::BeforeDay);
        report.record(DropReason::UnknownChannel);
        report.record(DropReason::UnknownChannel);

        assert_eq!(report.before_day, 1);
        assert_eq!(report.unknown_channel, 2);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
    }
}
