//! Time-blocked programme table layout.
//!
//! This crate computes the geometry of a TV programme table: channels are laid
//! out as fixed-width columns, the day is cut into rows of `block_size` hours,
//! and every programme block is stacked into the cell of its channel and the
//! row its start time falls into. It is independent of any UI toolkit; hosts
//! drive it with three explicit passes.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`block`]: The [`TableBlock`] trait programme blocks implement
//! - [`columns`]: Channel id to column index mapping
//! - [`cells`]: Per-pass `(row, column)` scratch tables
//! - [`growth`]: The grow-to-block height redistribution rules
//! - [`geometry`]: Layout results: row heights, block sizes, placements
//! - [`table`]: The [`TimeBlockTable`] engine tying the passes together
//! - [`paint`]: The [`Painter`] trait and a recording [`DisplayList`]
//! - [`error`]: Error types for table construction
//!
//! # Passes
//!
//! 1. [`TimeBlockTable::compute_geometry`] measures every block, sizes every
//!    row to its tallest cell and, when growth is enabled, hands the unused
//!    space of each cell to the blocks inside it.
//! 2. [`TimeBlockTable::place`] assigns every visible block its rectangle.
//! 3. [`TimeBlockTable::paint`] draws row shading, time labels and column
//!    separators through a [`Painter`].
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tvgrid_layout::{ChannelColumns, FixedBlock, Metrics, TableOptions, TimeBlockTable};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let columns = ChannelColumns::new([1u32, 2]);
//! let options = TableOptions {
//!     hours: 24,
//!     block_size: 12,
//!     grow_to_block: true,
//!     metrics: Metrics::default(),
//! };
//! let table = TimeBlockTable::new(day, columns, options).unwrap();
//!
//! let blocks = [
//!     FixedBlock::new(1u32, 8, 10, 40),
//!     FixedBlock::new(2u32, 8, 9, 10),
//! ];
//! let geometry = table.compute_geometry(&blocks);
//! assert_eq!(geometry.row_heights, vec![40, 0]);
//! // The short block grows to fill its row.
//! assert_eq!(geometry.block_height(1), Some(40));
//!
//! let placements = table.place(&geometry, &blocks);
//! assert_eq!(placements.len(), 2);
//! ```

pub mod block;
pub mod cells;
pub mod columns;
pub mod error;
pub mod geometry;
pub mod growth;
pub mod paint;
pub mod table;

// Re-export primary types at crate root for convenience
pub use block::{FixedBlock, TableBlock};
pub use columns::ChannelColumns;
pub use error::{LayoutError, Result};
pub use geometry::{BlockGeometry, DropReason, DropReport, Placement, Rect, TableGeometry};
pub use paint::{DisplayList, PaintOp, Painter, time_label};
pub use table::{Metrics, TableOptions, TimeBlockTable};
