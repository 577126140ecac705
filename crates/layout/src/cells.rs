//! Scratch tables indexed by `(row, column)`.
//!
//! Every layout pass allocates fresh tables sized from the table's row count
//! and column count and drops them when the pass ends; nothing is carried over
//! between passes.

/// A dense `rows × columns` table stored in a single vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTable<T> {
    columns: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> CellTable<T> {
    /// Creates a table filled with `T::default()`.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            cells: vec![T::default(); rows * columns],
        }
    }

    /// Returns the value of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> T {
        self.cells[self.offset(row, column)]
    }

    /// Returns a mutable reference to a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of bounds.
    pub fn get_mut(&mut self, row: usize, column: usize) -> &mut T {
        let offset = self.offset(row, column);
        &mut self.cells[offset]
    }

    /// Returns all cells of a row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.cells.len() / self.columns
        }
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(column < self.columns, "column {column} out of bounds");
        row * self.columns + column
    }
}
