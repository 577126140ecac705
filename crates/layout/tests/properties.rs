//! Property tests for the time-block table layout.

use chrono::NaiveDate;
use proptest::prelude::*;
use tvgrid_layout::growth::forward_run;
use tvgrid_layout::{ChannelColumns, FixedBlock, Metrics, TableOptions, TimeBlockTable};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

fn build_table(columns: u32, block_size: u32, hours: u32, grow: bool) -> TimeBlockTable<u32> {
    let options = TableOptions {
        hours,
        block_size,
        grow_to_block: grow,
        metrics: Metrics {
            column_width: 12,
            gap: 1,
            row_header: 5,
            font_ascent: 0,
        },
    };
    TimeBlockTable::new(day(), ChannelColumns::new(0..columns), options).expect("valid table")
}

/// Blocks on up to one channel more than there are columns, starting up to
/// a few hours outside the day.
fn blocks_strategy(columns: u32) -> impl Strategy<Value = Vec<FixedBlock<u32>>> {
    prop::collection::vec(
        (0..=columns, -10i32..32, 0i32..12, 0u32..40, any::<bool>()),
        0..24,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|(channel, start, duration, height, visible)| {
                let block = FixedBlock::new(channel, start, start + duration, height);
                if visible { block } else { block.hidden() }
            })
            .collect()
    })
}

fn table_and_blocks(grow: bool) -> impl Strategy<Value = (TimeBlockTable<u32>, Vec<FixedBlock<u32>>)> {
    (1u32..5, 1u32..9, prop_oneof![Just(24u32), Just(28u32)]).prop_flat_map(
        move |(columns, block_size, hours)| {
            (
                Just(build_table(columns, block_size, hours, grow)),
                blocks_strategy(columns),
            )
        },
    )
}

proptest! {
    /// Every cumulative height is the previous one plus the row's height.
    #[test]
    fn cumulative_heights_are_a_prefix_sum((table, blocks) in table_and_blocks(true)) {
        let geometry = table.compute_geometry(&blocks);
        let mut bottom = 0;
        for (row, height) in geometry.row_heights.iter().enumerate() {
            bottom += height;
            prop_assert_eq!(geometry.cumulative_heights[row], bottom);
        }
        prop_assert_eq!(geometry.height, bottom);
    }

    /// No cell's natural content is taller than its row.
    #[test]
    fn rows_fit_every_cell((table, blocks) in table_and_blocks(false)) {
        let geometry = table.compute_geometry(&blocks);
        for row in 0..geometry.row_count() {
            for column in 0..geometry.columns {
                prop_assert!(geometry.row_heights[row] >= geometry.cell_natural_height(row, column));
            }
        }
    }

    /// Without growth, blocks keep their natural height and the table is as
    /// tall as the sum of the per-row maxima.
    #[test]
    fn growth_off_keeps_natural_heights((table, blocks) in table_and_blocks(false)) {
        let geometry = table.compute_geometry(&blocks);
        let mut expected = 0;
        for row in 0..geometry.row_count() {
            expected += (0..geometry.columns)
                .map(|column| geometry.cell_natural_height(row, column))
                .max()
                .unwrap_or(0);
        }
        prop_assert_eq!(geometry.height, expected);
        for block in geometry.blocks.iter().flatten() {
            prop_assert_eq!(block.height, block.natural_height);
        }
    }

    /// With growth, a cell fills its row exactly unless its last block runs
    /// on into empty rows, in which case it takes those rows instead of the
    /// rounding remainder.
    #[test]
    fn growth_on_fills_cells_exactly((table, blocks) in table_and_blocks(true)) {
        let geometry = table.compute_geometry(&blocks);
        for row in 0..geometry.row_count() {
            for column in 0..geometry.columns {
                let count = geometry.cell_count(row, column) as u32;
                if count == 0 {
                    continue;
                }
                let last = geometry
                    .blocks
                    .iter()
                    .flatten()
                    .filter(|b| b.row == row && b.column == column)
                    .last()
                    .expect("non-empty cell");
                let run = forward_run(
                    &geometry.row_heights,
                    |r| geometry.cell_count(r, column) as u32,
                    row,
                    last.end_row,
                );

                let row_height = geometry.row_heights[row];
                let diff = row_height - geometry.cell_natural_height(row, column);
                let expected = if run.rows == 0 {
                    row_height
                } else {
                    row_height - diff % count + run.height
                };
                prop_assert_eq!(geometry.cell_height(row, column), expected);
            }
        }
    }

    /// Blocks outside the table are counted, contribute nothing and are not
    /// placed.
    #[test]
    fn out_of_range_blocks_are_dropped((table, blocks) in table_and_blocks(true)) {
        let geometry = table.compute_geometry(&blocks);
        let placements = table.place(&geometry, &blocks);
        let block_size = table.options().block_size as i32;

        let mut expected_dropped = 0;
        for (index, block) in blocks.iter().enumerate() {
            let row = block.start_hour / block_size;
            let outside = table.columns().index_of(&block.channel).is_none()
                || row < 0
                || row as usize >= table.row_count();
            if outside {
                expected_dropped += 1;
                prop_assert!(geometry.blocks[index].is_none());
                prop_assert!(placements.iter().all(|p| p.index != index));
            } else {
                prop_assert!(geometry.blocks[index].is_some());
            }
        }
        prop_assert_eq!(geometry.dropped.total(), expected_dropped);
    }

    /// Placed blocks stay inside the table and only visible blocks are placed.
    #[test]
    fn placements_stay_inside_the_table((table, blocks) in table_and_blocks(true)) {
        let geometry = table.compute_geometry(&blocks);
        for placement in table.place(&geometry, &blocks) {
            prop_assert!(blocks[placement.index].visible);
            prop_assert!(placement.rect.bottom() <= geometry.height);
            prop_assert!(placement.rect.right() <= geometry.width);
        }
    }

    /// Running all passes twice yields identical results.
    #[test]
    fn passes_are_idempotent((table, blocks) in table_and_blocks(true)) {
        let first = table.compute_geometry(&blocks);
        let second = table.compute_geometry(&blocks);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(table.place(&first, &blocks), table.place(&second, &blocks));
    }
}
