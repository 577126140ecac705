//! The time-blocked programme table engine.
//!
//! [`TimeBlockTable`] holds everything that stays fixed for a table (the day
//! shown, the channel columns, the row partition and the pixel metrics) and
//! runs the layout passes over whatever blocks the host currently has. No
//! state survives a pass, so running the passes twice over the same blocks
//! gives identical results.

use std::hash::Hash;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::block::TableBlock;
use crate::cells::CellTable;
use crate::columns::ChannelColumns;
use crate::error::{LayoutError, Result};
use crate::geometry::{BlockGeometry, DropReason, DropReport, Placement, Rect, TableGeometry};
use crate::growth::{Visit, extra_height, forward_run};
use crate::paint::{Painter, time_label};

/// Fixed sizes of the table, in whatever unit the host draws in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// Width of a channel column.
    pub column_width: u32,
    /// Space between columns, and between the row header and the first column.
    pub gap: u32,
    /// Width of the row header gutter holding the time labels.
    pub row_header: u32,
    /// Distance from a row's top edge to the time label's baseline.
    pub font_ascent: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            column_width: 16,
            gap: 1,
            row_header: 6,
            font_ascent: 0,
        }
    }
}

/// Options a table is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Hours covered by the table, counted from midnight of the shown day.
    pub hours: u32,
    /// Hours per row.
    pub block_size: u32,
    /// Whether blocks grow to fill the unused space of their row.
    pub grow_to_block: bool,
    /// Fixed sizes.
    pub metrics: Metrics,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            hours: 28,
            block_size: 2,
            grow_to_block: true,
            metrics: Metrics::default(),
        }
    }
}

impl TableOptions {
    /// Returns the number of rows, rounding a partial last block up.
    ///
    /// # Examples
    ///
    /// ```
    /// use tvgrid_layout::TableOptions;
    ///
    /// let options = TableOptions { hours: 28, block_size: 3, ..Default::default() };
    /// assert_eq!(options.row_count(), 10);
    /// ```
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.hours.div_ceil(self.block_size.max(1)) as usize
    }

    fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(LayoutError::ZeroBlockSize);
        }
        if self.hours == 0 {
            return Err(LayoutError::ZeroHours);
        }
        if self.metrics.column_width == 0 {
            return Err(LayoutError::ZeroColumnWidth);
        }
        Ok(())
    }
}

/// A programme table for one day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tvgrid_layout::{ChannelColumns, DisplayList, FixedBlock, TableOptions, TimeBlockTable};
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let table = TimeBlockTable::new(day, ChannelColumns::new([1u32]), TableOptions::default()).unwrap();
///
/// let blocks = [FixedBlock::new(1u32, 20, 22, 3)];
/// let geometry = table.compute_geometry(&blocks);
/// let placements = table.place(&geometry, &blocks);
/// assert_eq!(placements[0].rect.x, 7);
///
/// let mut list = DisplayList::new(1);
/// table.paint(&geometry, &mut list, geometry.width, geometry.height);
/// assert!(!list.ops().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TimeBlockTable<Id: Eq + Hash> {
    day: NaiveDate,
    columns: ChannelColumns<Id>,
    options: TableOptions,
    rows: usize,
}

impl<Id: Eq + Hash> TimeBlockTable<Id> {
    /// Creates a table for `day` with the given columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the block size, the hour count or the column width
    /// is zero.
    pub fn new(day: NaiveDate, columns: ChannelColumns<Id>, options: TableOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            day,
            columns,
            rows: options.row_count(),
            options,
        })
    }

    /// Returns the day the table shows.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Returns the channel columns.
    #[must_use]
    pub fn columns(&self) -> &ChannelColumns<Id> {
        &self.columns
    }

    /// Returns the options the table was built with.
    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Returns the left edge of a column's blocks.
    #[must_use]
    pub fn column_x(&self, column: usize) -> u32 {
        let m = &self.options.metrics;
        m.row_header + m.gap + column as u32 * (m.column_width + m.gap)
    }

    /// Returns the position of the separator line in front of a column.
    #[must_use]
    pub fn separator_x(&self, column: usize) -> u32 {
        let m = &self.options.metrics;
        m.row_header + column as u32 * (m.column_width + m.gap)
    }

    /// Returns the total table width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.column_x(self.columns.len())
    }

    /// Returns the hour a row starts at.
    #[must_use]
    pub fn row_start_hour(&self, row: usize) -> u32 {
        row as u32 * self.options.block_size
    }

    /// Measures all blocks and sizes every row.
    ///
    /// Blocks whose channel has no column, or that start outside the table's
    /// rows, are left out and counted in [`TableGeometry::dropped`]. With
    /// growth enabled, the remaining blocks are stretched as described in
    /// [`crate::growth`].
    #[instrument(level = "debug", skip_all, fields(day = %self.day, blocks = blocks.len()))]
    pub fn compute_geometry<B>(&self, blocks: &[B]) -> TableGeometry
    where
        B: TableBlock<ChannelId = Id>,
    {
        let column_count = self.columns.len();
        let mut sums: CellTable<u32> = CellTable::new(self.rows, column_count);
        let mut counts: CellTable<u32> = CellTable::new(self.rows, column_count);
        let mut dropped = DropReport::default();

        let mut layout = Vec::with_capacity(blocks.len());
        for (index, block) in blocks.iter().enumerate() {
            match self.locate(block) {
                Ok((row, column, end_row)) => {
                    let natural_height = block.measure_height(self.options.metrics.column_width);
                    let sum = sums.get_mut(row, column);
                    *sum = sum.saturating_add(natural_height);
                    *counts.get_mut(row, column) += 1;
                    layout.push(Some(BlockGeometry {
                        row,
                        end_row,
                        column,
                        natural_height,
                        height: natural_height,
                    }));
                }
                Err(reason) => {
                    debug!(index, ?reason, "leaving programme block out of the table");
                    dropped.record(reason);
                    layout.push(None);
                }
            }
        }

        let row_heights: Vec<u32> = (0..self.rows)
            .map(|row| sums.row(row).iter().copied().max().unwrap_or(0))
            .collect();
        let cumulative_heights: Vec<u32> = row_heights
            .iter()
            .scan(0u32, |bottom, &height| {
                *bottom = bottom.saturating_add(height);
                Some(*bottom)
            })
            .collect();

        if self.options.grow_to_block {
            grow(&mut layout, &row_heights, &sums, &counts, column_count);
        }

        if !dropped.is_empty() {
            debug!(
                before_day = dropped.before_day,
                after_day = dropped.after_day,
                unknown_channel = dropped.unknown_channel,
                "programme blocks left out"
            );
        }

        TableGeometry {
            height: cumulative_heights.last().copied().unwrap_or(0),
            width: self.width(),
            row_heights,
            cumulative_heights,
            blocks: layout,
            columns: column_count,
            dropped,
        }
    }

    /// Assigns every visible block its rectangle, with the table at the origin.
    ///
    /// `geometry` must come from [`compute_geometry`](Self::compute_geometry)
    /// on this table with the same blocks.
    #[must_use]
    pub fn place<B>(&self, geometry: &TableGeometry, blocks: &[B]) -> Vec<Placement>
    where
        B: TableBlock<ChannelId = Id>,
    {
        self.place_at(geometry, blocks, 0, 0)
    }

    /// Assigns every visible block its rectangle, with the table's top-left
    /// corner at `(left, top)`.
    ///
    /// Blocks are stacked in each cell in slice order. Hidden blocks get no
    /// rectangle but still take up their height in the cell.
    #[must_use]
    pub fn place_at<B>(
        &self,
        geometry: &TableGeometry,
        blocks: &[B],
        left: u32,
        top: u32,
    ) -> Vec<Placement>
    where
        B: TableBlock<ChannelId = Id>,
    {
        let m = &self.options.metrics;
        let mut consumed: CellTable<u32> = CellTable::new(geometry.row_count(), geometry.columns);
        let mut placements = Vec::with_capacity(blocks.len());

        for (index, (block, layout)) in blocks.iter().zip(&geometry.blocks).enumerate() {
            let Some(layout) = layout else {
                continue;
            };

            let used = consumed.get_mut(layout.row, layout.column);
            let x = left.saturating_add(self.column_x(layout.column));
            let y = top
                .saturating_add(geometry.row_top(layout.row))
                .saturating_add(*used);
            *used = used.saturating_add(layout.height);

            if block.is_visible() {
                placements.push(Placement {
                    index,
                    rect: Rect::new(x, y, m.column_width + m.gap, layout.height),
                });
            }
        }

        placements
    }

    /// Paints row shading, time labels and column separators.
    ///
    /// `width` and `height` are the size of the surface; shading spans the
    /// full width and separators the full height.
    pub fn paint(&self, geometry: &TableGeometry, painter: &mut impl Painter, width: u32, height: u32) {
        let m = &self.options.metrics;

        for (row, &row_height) in geometry.row_heights.iter().enumerate() {
            let top = geometry.row_top(row);
            if row % 2 == 1 {
                painter.shade_band(top, row_height, width);
            }

            let label = time_label(self.row_start_hour(row));
            let label_width = painter.measure_text(&label);
            let x = i64::from(m.row_header / 2) - i64::from(label_width / 2);
            painter.text(x, m.font_ascent + top, &label);
        }

        for column in 0..geometry.columns {
            painter.vertical_line(self.separator_x(column), height);
        }
    }

    /// Resolves the row, column and end row of a block.
    fn locate<B>(&self, block: &B) -> std::result::Result<(usize, usize, i64), DropReason>
    where
        B: TableBlock<ChannelId = Id>,
    {
        let column = self
            .columns
            .index_of(&block.channel_id())
            .ok_or(DropReason::UnknownChannel)?;

        // Integer division truncates toward zero: a block starting less than
        // one block before midnight still lands in the first row.
        let block_size = i64::from(self.options.block_size);
        let row = i64::from(block.start_hour(self.day)) / block_size;
        let end_row = i64::from(block.end_hour(self.day)) / block_size;

        if row < 0 {
            return Err(DropReason::BeforeDay);
        }
        let row = row as usize;
        if row >= self.rows {
            return Err(DropReason::AfterDay);
        }
        Ok((row, column, end_row))
    }
}

/// Hands the unused space of every cell to the blocks in it.
fn grow(
    layout: &mut [Option<BlockGeometry>],
    row_heights: &[u32],
    sums: &CellTable<u32>,
    counts: &CellTable<u32>,
    column_count: usize,
) {
    let mut visited: CellTable<u32> = CellTable::new(row_heights.len(), column_count);

    for block in layout.iter_mut().flatten() {
        let (row, column) = (block.row, block.column);
        let height_diff = row_heights[row] - sums.get(row, column);
        let count = counts.get(row, column);

        let seen = visited.get_mut(row, column);
        *seen += 1;
        let visit = if *seen == count {
            Visit::Last(forward_run(
                row_heights,
                |r| counts.get(r, column),
                row,
                block.end_row,
            ))
        } else {
            Visit::Inner
        };

        block.height = block
            .natural_height
            .saturating_add(extra_height(height_diff, count, visit));
    }
}
