//! Confirmed orders and the kitchen stage machine.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartTotals};
use crate::error::DomainError;
use crate::money::Money;

/// How the customer paid.
///
/// A declarative tag only; no gateway is consulted in this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
}

impl PaymentMethod {
    /// Returns the method name as shown on the bill.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the order is consumed on the premises or taken away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FulfillmentType {
    DineIn,
    Takeaway,
}

impl FulfillmentType {
    /// Returns the fulfillment label as shown on the kitchen board.
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentType::DineIn => "Dine-In",
            FulfillmentType::Takeaway => "Takeaway",
        }
    }
}

impl std::fmt::Display for FulfillmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A discrete step in an order's kitchen fulfillment lifecycle.
///
/// Stage transitions, strictly forward, one at a time:
/// ```text
/// Pending ──► Cooking ──► Ready ──► Served
/// ```
/// `Served` is terminal: the order stays queryable for billing but accepts
/// no further transitions. No skip-ahead, no regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Stage {
    /// Admitted, waiting for the kitchen to pick it up.
    #[default]
    Pending,

    /// Being prepared.
    Cooking,

    /// Prepared, waiting to be handed over.
    Ready,

    /// Handed over (terminal).
    Served,
}

impl Stage {
    /// All stages, in board column order.
    pub const ALL: [Stage; 4] = [Stage::Pending, Stage::Cooking, Stage::Ready, Stage::Served];

    /// The adjacency table of legal transitions: the single stage that
    /// follows this one, or `None` at the terminal stage.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Pending => Some(Stage::Cooking),
            Stage::Cooking => Some(Stage::Ready),
            Stage::Ready => Some(Stage::Served),
            Stage::Served => None,
        }
    }

    /// Returns true if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Served)
    }

    /// Returns the stage name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Pending => "Pending",
            Stage::Cooking => "Cooking",
            Stage::Ready => "Ready",
            Stage::Served => "Served",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A confirmed order: an immutable snapshot of a finalized cart, plus the
/// one mutable field, its kitchen stage.
///
/// Lines and totals are deep copies frozen at admission, so mutating the
/// source cart afterwards can never reach into an admitted order. Orders
/// are never destroyed within a session; served orders remain queryable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    lines: Vec<CartLine>,
    subtotal: Money,
    tax: Money,
    total: Money,
    payment_method: PaymentMethod,
    fulfillment: FulfillmentType,
    table_label: String,
    created_at: DateTime<Utc>,
    stage: Stage,
}

impl Order {
    /// Assembles a confirmed order from an admission snapshot.
    ///
    /// Called by the admission desk only; presentation code receives orders,
    /// it does not build them.
    pub fn new(
        id: OrderId,
        lines: Vec<CartLine>,
        totals: CartTotals,
        payment_method: PaymentMethod,
        fulfillment: FulfillmentType,
        table_label: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            lines,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            payment_method,
            fulfillment,
            table_label: table_label.into(),
            created_at,
            stage: Stage::Pending,
        }
    }

    /// Returns the order ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the lines frozen at admission.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the subtotal frozen at admission.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Returns the tax frozen at admission.
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Returns the total frozen at admission.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Returns the recorded payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Returns the fulfillment type.
    pub fn fulfillment(&self) -> FulfillmentType {
        self.fulfillment
    }

    /// Returns the table number or takeaway label.
    pub fn table_label(&self) -> &str {
        &self.table_label
    }

    /// Returns the admission timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the current kitchen stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns true if the order has reached its terminal stage.
    pub fn is_terminal(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Moves the order forward by exactly one stage.
    ///
    /// The assignment is a single write; an order is never observably in
    /// two stages at once.
    pub fn advance(&mut self) -> Result<Stage, DomainError> {
        match self.stage.next() {
            Some(next) => {
                self.stage = next;
                Ok(next)
            }
            None => Err(DomainError::InvalidTransition {
                order_id: self.id,
                stage: self.stage,
            }),
        }
    }
}
