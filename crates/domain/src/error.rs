//! Domain error types.

use common::OrderId;
use thiserror::Error;

use crate::order::Stage;

/// Errors that can occur in the order-taking and fulfillment core.
///
/// Every error is a synchronous return value, local and recoverable by the
/// caller; none is fatal to the process. The deliberately silent no-ops on
/// the cart (adjusting or removing an absent line) are non-events, not
/// errors, and never surface here.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An operation's precondition was violated; no state changed.
    #[error("invalid state: {reason}")]
    InvalidState { reason: &'static str },

    /// A stage advance was attempted on an order that accepts none.
    #[error("invalid transition: order {order_id} cannot advance from {stage}")]
    InvalidTransition { order_id: OrderId, stage: Stage },

    /// A referenced order does not exist.
    #[error("order not found: {order_id}")]
    NotFound { order_id: OrderId },
}
