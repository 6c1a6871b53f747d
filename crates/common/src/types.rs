use serde::{Deserialize, Serialize};

/// Unique identifier for an admitted order.
///
/// Wraps the monotonic ticket number assigned at admission. Ticket numbers
/// establish a total order over admissions, so sorting by `OrderId` is
/// sorting by arrival — no wall-clock comparison involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Creates an order ID from a ticket number.
    pub fn new(ticket: u64) -> Self {
        Self(ticket)
    }

    /// Returns the underlying ticket number.
    pub fn ticket(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#BF{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(ticket: u64) -> Self {
        Self(ticket)
    }
}

impl From<OrderId> for u64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

/// Identifier for a catalog item.
///
/// Assigned at catalog load and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// Creates an item ID from a raw number.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}
