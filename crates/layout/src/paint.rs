//! Painting the table background.
//!
//! The engine only paints what belongs to the table itself: shading on every
//! other row, the time label at the top of each row and a separator line in
//! front of every column. Programme blocks are painted by the host at their
//! [`Placement`](crate::Placement).

/// A drawing surface the table paints onto.
pub trait Painter {
    /// Fills a horizontal band spanning `width` units from the left edge.
    fn shade_band(&mut self, y: u32, height: u32, width: u32);

    /// Draws a vertical line from the top edge down to `height`.
    fn vertical_line(&mut self, x: u32, height: u32);

    /// Returns the width `text` occupies when drawn.
    fn measure_text(&self, text: &str) -> u32;

    /// Draws `text` with its left edge at `x` and its baseline at `baseline`.
    ///
    /// `x` is negative when the text is wider than the row header.
    fn text(&mut self, x: i64, baseline: u32, text: &str);
}

/// Formats the label of a row starting at `hour`.
///
/// Hours past midnight wrap around, so tables covering more than a day label
/// the overflow rows with early-morning times.
///
/// # Examples
///
/// ```
/// use tvgrid_layout::time_label;
///
/// assert_eq!(time_label(6), "06:00");
/// assert_eq!(time_label(26), "02:00");
/// ```
#[must_use]
pub fn time_label(hour: u32) -> String {
    format!("{:02}:00", hour % 24)
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintOp {
    /// A shaded row band.
    ShadeBand {
        /// Top edge.
        y: u32,
        /// Band height.
        height: u32,
        /// Band width.
        width: u32,
    },
    /// A column separator.
    VerticalLine {
        /// Horizontal position.
        x: u32,
        /// Line length from the top.
        height: u32,
    },
    /// A time label.
    Text {
        /// Left edge.
        x: i64,
        /// Baseline.
        baseline: u32,
        /// The label.
        text: String,
    },
}

/// A [`Painter`] that records operations instead of drawing them.
///
/// Text is measured as a fixed width per character.
///
/// # Examples
///
/// ```
/// use tvgrid_layout::{DisplayList, PaintOp, Painter};
///
/// let mut list = DisplayList::new(1);
/// list.vertical_line(4, 10);
/// assert_eq!(list.measure_text("20:00"), 5);
/// assert_eq!(list.ops(), &[PaintOp::VerticalLine { x: 4, height: 10 }]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayList {
    char_width: u32,
    ops: Vec<PaintOp>,
}

impl DisplayList {
    /// Creates an empty list measuring `char_width` units per character.
    #[must_use]
    pub fn new(char_width: u32) -> Self {
        Self {
            char_width,
            ops: Vec::new(),
        }
    }

    /// Returns the recorded operations in drawing order.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Consumes the list, returning the recorded operations.
    #[must_use]
    pub fn into_ops(self) -> Vec<PaintOp> {
        self.ops
    }
}

impl Painter for DisplayList {
    fn shade_band(&mut self, y: u32, height: u32, width: u32) {
        self.ops.push(PaintOp::ShadeBand { y, height, width });
    }

    fn vertical_line(&mut self, x: u32, height: u32) {
        self.ops.push(PaintOp::VerticalLine { x, height });
    }

    fn measure_text(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.char_width
    }

    fn text(&mut self, x: i64, baseline: u32, text: &str) {
        self.ops.push(PaintOp::Text {
            x,
            baseline,
            text: text.to_string(),
        });
    }
}
