//! Shared identifier types for the BrewFlow POS core.

mod types;

pub use types::{ItemId, OrderId};
