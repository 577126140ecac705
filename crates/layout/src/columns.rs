//! Channel id to column index mapping.

use std::collections::HashMap;
use std::hash::Hash;

/// The fixed, ordered list of channels shown as table columns.
///
/// The order is supplied once by the host and never changes for the lifetime
/// of a table. Ids that appear more than once keep their first column.
///
/// # Examples
///
/// ```
/// use tvgrid_layout::ChannelColumns;
///
/// let columns = ChannelColumns::new(["zdf", "ard", "arte"]);
/// assert_eq!(columns.len(), 3);
/// assert_eq!(columns.index_of(&"ard"), Some(1));
/// assert_eq!(columns.index_of(&"br"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelColumns<Id: Eq + Hash> {
    order: Vec<Id>,
    index: HashMap<Id, usize>,
}

impl<Id: Eq + Hash + Clone> ChannelColumns<Id> {
    /// Creates the mapping from channel ids in column order.
    #[must_use]
    pub fn new(order: impl IntoIterator<Item = Id>) -> Self {
        let order: Vec<Id> = order.into_iter().collect();
        let mut index = HashMap::with_capacity(order.len());
        for (column, id) in order.iter().enumerate() {
            index.entry(id.clone()).or_insert(column);
        }
        Self { order, index }
    }
}

impl<Id: Eq + Hash> ChannelColumns<Id> {
    /// Returns the column of a channel, or `None` if it is not shown.
    #[must_use]
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the channel ids in column order.
    #[must_use]
    pub fn ids(&self) -> &[Id] {
        &self.order
    }
}
