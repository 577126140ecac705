//! Error types for the layout crate.
//!
//! Layout passes never fail; only constructing a [`TimeBlockTable`] with
//! options that cannot describe a table is rejected.
//!
//! [`TimeBlockTable`]: crate::TimeBlockTable

use thiserror::Error;

/// Errors that can occur when building a programme table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The time block size was zero hours.
    #[error("invalid block size: a time block must span at least one hour")]
    ZeroBlockSize,

    /// The table covers zero hours.
    #[error("invalid hour count: the table must cover at least one hour")]
    ZeroHours,

    /// Columns would have no width.
    #[error("invalid column width: columns must be at least one unit wide")]
    ZeroColumnWidth,
}

/// A specialized Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            LayoutError::ZeroBlockSize.to_string(),
            "invalid block size: a time block must span at least one hour"
        );
        assert!(LayoutError::ZeroColumnWidth.to_string().contains("column width"));
    }
}
