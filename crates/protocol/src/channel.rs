//! Channels shown in the programme guide.

use serde::{Deserialize, Serialize};

/// Identifier of a channel.
pub type ChannelId = u32;

/// A TV channel.
///
/// Channels are displayed in ascending `order`, ties broken by id.
///
/// # Examples
///
/// ```
/// use tvgrid_protocol::Channel;
///
/// let channel = Channel::new(3, "arte").with_order(1);
/// assert_eq!(channel.name, "arte");
/// assert_eq!(channel.order, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    /// Unique identifier.
    pub id: ChannelId,
    /// Display name.
    pub name: String,
    /// Position in the user's channel order.
    #[serde(default)]
    pub order: u32,
}

impl Channel {
    /// Creates a channel with order 0.
    #[must_use]
    pub fn new(id: ChannelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            order: 0,
        }
    }

    /// Sets the channel's position in the channel order.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }
}
