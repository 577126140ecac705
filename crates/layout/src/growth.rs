//! Grow-to-block height redistribution.
//!
//! A row is as tall as its fullest cell, which leaves the other cells of the
//! row with unused space at the bottom. With growth enabled that space is
//! handed to the blocks of the cell instead:
//!
//! - every block of the cell receives `height_diff / block_count`;
//! - the last block of the cell also swallows the following rows in which its
//!   column has no block at all, as long as the block is still running there;
//! - if it swallowed nothing, it takes the integer remainder
//!   `height_diff % block_count` so the cell ends exactly at the row bottom.
//!
//! ```text
//!          col 0          col 1
//! row 0  ┌────────┐     ┌────────┐
//!        │ News   │     │ Movie  │   News grows to the row height.
//!        │ (grown)│     │        │
//! row 1  │        │     │        │   Column 0 is empty here and News is still
//!        │        │     │        │   running: News swallows the whole row.
//!        └────────┘     └────────┘
//! ```

/// The forward run of empty rows a cell's last block swallows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForwardRun {
    /// Number of rows swallowed.
    pub rows: usize,
    /// Their summed height.
    pub height: u32,
}

/// Where in its cell a visited block sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Not the last block of the cell.
    Inner,
    /// The last block of the cell, with the rows it runs on into.
    Last(ForwardRun),
}

/// Finds the empty rows following `row` that a block ending in `end_row`
/// keeps running through.
///
/// `row_heights` holds the final height of every row and `cell_count(r)`
/// returns how many blocks start in row `r` of the block's column. The run
/// stops at the first row that has a block in this column, at the block's end
/// row, or at the end of the table.
///
/// # Examples
///
/// ```
/// use tvgrid_layout::growth::{ForwardRun, forward_run};
///
/// let heights = [30, 20, 25, 40];
/// let counts = [1, 0, 0, 1];
///
/// // A block in row 0 that ends in row 3 swallows rows 1 and 2.
/// let run = forward_run(&heights, |r| counts[r], 0, 3);
/// assert_eq!(run, ForwardRun { rows: 2, height: 45 });
///
/// // Ending in row 2 stops before it.
/// let run = forward_run(&heights, |r| counts[r], 0, 2);
/// assert_eq!(run, ForwardRun { rows: 1, height: 20 });
/// ```
#[must_use]
pub fn forward_run(
    row_heights: &[u32],
    cell_count: impl Fn(usize) -> u32,
    row: usize,
    end_row: i64,
) -> ForwardRun {
    let mut run = ForwardRun::default();
    let mut next = row + 1;
    while next < row_heights.len() && cell_count(next) == 0 && end_row > next as i64 {
        run.height = run.height.saturating_add(row_heights[next]);
        run.rows += 1;
        next += 1;
    }
    run
}

/// Computes how much a block grows.
///
/// `height_diff` is the unused space of the block's cell and `block_count`
/// the number of blocks in it, which is at least one for any visited block.
///
/// # Examples
///
/// ```
/// use tvgrid_layout::growth::{ForwardRun, Visit, extra_height};
///
/// // 10 units shared by three blocks.
/// assert_eq!(extra_height(10, 3, Visit::Inner), 3);
/// assert_eq!(extra_height(10, 3, Visit::Last(ForwardRun::default())), 4);
///
/// // A last block running into an empty row takes that row instead of the remainder.
/// let run = ForwardRun { rows: 1, height: 25 };
/// assert_eq!(extra_height(10, 3, Visit::Last(run)), 28);
/// ```
#[must_use]
pub fn extra_height(height_diff: u32, block_count: u32, visit: Visit) -> u32 {
    debug_assert!(block_count > 0, "growth needs a non-empty cell");
    let count = block_count.max(1);
    let share = height_diff / count;
    match visit {
        Visit::Inner => share,
        Visit::Last(run) if run.rows == 0 => share + height_diff % count,
        Visit::Last(run) => share.saturating_add(run.height),
    }
}
